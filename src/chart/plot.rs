use std::fmt::Write;

use crate::{chart::performance::PerformancePoint, settings::Palette};

pub const CHART_TITLE: &str = "Performance Over Time";

/// y 轴固定为 0 到 100，每行 10 分
const Y_STEP: i64 = 10;
const Y_MAX: i64 = 100;
const POINT: char = '●';

/// 以文本折线图的形式输出分数序列
pub fn render_chart(points: &[PerformancePoint], palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.paint(palette.heading, CHART_TITLE));

    if points.is_empty() {
        let _ = writeln!(out, "{}", palette.paint(palette.muted, "No task history yet."));
        return out;
    }

    let col_width = points.iter().map(|p| p.name.chars().count()).max().unwrap_or(0) + 2;
    let levels: Vec<i64> = points.iter().map(|p| level_of(p.score)).collect();

    let mut value = Y_MAX;
    while value >= 0 {
        let mut row = format!("{:>4} ┤", value);
        for level in &levels {
            let mut cell = vec![' '; col_width];
            if *level == value {
                cell[col_width / 2] = POINT;
            }
            row.extend(cell);
        }
        let row = row.trim_end().replace(POINT, &palette.paint(palette.accent, "●"));
        let _ = writeln!(out, "{}", row);
        value -= Y_STEP;
    }

    let _ = writeln!(out, "     └{}", "─".repeat(col_width * points.len()));
    let labels: String = points
        .iter()
        .map(|p| format!("{:^width$}", p.name, width = col_width))
        .collect();
    let _ = writeln!(out, "      {}", labels.trim_end());
    let _ = writeln!(out, "      {} score", palette.paint(palette.accent, "●"));
    out
}

/// 把分数映射到最近的刻度行
fn level_of(score: f64) -> i64 {
    let level = (score / Y_STEP as f64).round() as i64 * Y_STEP;
    level.clamp(0, Y_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(index: usize, score: f64) -> PerformancePoint {
        PerformancePoint {
            index,
            name: format!("Task {}", index),
            score,
        }
    }

    #[test]
    fn test_empty_chart() {
        let text = render_chart(&[], &Palette::plain());
        assert_eq!(text, "Performance Over Time\nNo task history yet.\n");
    }

    #[test]
    fn test_points_land_on_their_rows() {
        let text = render_chart(&[point(1, 90.0), point(2, 42.0)], &Palette::plain());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Performance Over Time");
        let row_90 = lines.iter().find(|l| l.starts_with("  90 ┤")).unwrap();
        let row_40 = lines.iter().find(|l| l.starts_with("  40 ┤")).unwrap();
        assert_eq!(row_90.matches('●').count(), 1);
        assert_eq!(row_40.matches('●').count(), 1);
        // 第二个点位于第一个点右侧
        assert!(row_40.find('●').unwrap() > row_90.find('●').unwrap());

        let plotted: usize = lines[1..12].iter().map(|l| l.matches('●').count()).sum();
        assert_eq!(plotted, 2);
        assert!(text.contains("Task 1"));
        assert!(text.contains("Task 2"));
    }

    #[test]
    fn test_level_rounding() {
        assert_eq!(level_of(0.0), 0);
        assert_eq!(level_of(44.9), 40);
        assert_eq!(level_of(45.0), 50);
        assert_eq!(level_of(100.0), 100);
        assert_eq!(level_of(130.0), 100);
    }
}
