use std::fmt::Write;

use crate::{
    models::TaskResult,
    settings::Palette,
    visualization::{
        renderer::DecisionProcessView,
        stage::{Marker, SectionState, Stage, StageLine},
        status::Status,
    },
};

/// 把可视化视图写成终端文本，折叠的阶段只输出标题
pub fn render_view(view: &DecisionProcessView, sections: &SectionState, palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        palette.paint(palette.heading, DecisionProcessView::HEADING)
    );
    let _ = writeln!(out);

    for stage in &view.stages {
        render_stage(&mut out, stage, sections.is_expanded(stage.kind), palette);
    }
    out
}

fn render_stage(out: &mut String, stage: &Stage, expanded: bool, palette: &Palette) {
    let chevron = if expanded { "▼" } else { "▶" };
    let _ = writeln!(out, "{} {}", chevron, palette.paint(palette.heading, stage.title()));
    if !expanded {
        return;
    }

    for line in &stage.lines {
        render_line(out, line, palette);
    }

    if let Some(lessons) = &stage.lessons {
        let _ = writeln!(out, "  Key Learnings:");
        for lesson in lessons {
            let _ = writeln!(out, "    • {}", palette.paint(palette.muted, lesson));
        }
    }
    let _ = writeln!(out);
}

fn render_line(out: &mut String, line: &StageLine, palette: &Palette) {
    let status = line.step.status;
    let color = status_color(status, palette);
    let marker = match line.marker {
        Marker::None => String::new(),
        marker => format!("{} ", palette.paint(palette.accent, &marker.to_string())),
    };
    let _ = writeln!(
        out,
        "  {}{} {} [{}]",
        marker,
        palette.paint(color, status.icon()),
        line.step.title,
        palette.paint(color, status.as_str())
    );
    let _ = writeln!(out, "      {}", palette.paint(palette.muted, &line.step.details));
}

fn status_color(status: Status, palette: &Palette) -> &'static str {
    match status {
        Status::Completed => palette.completed,
        Status::Warning => palette.warning,
        Status::Failed => palette.failed,
    }
}

/// "Raw Result:" 区块，原样输出格式化后的 JSON
pub fn render_raw(result: &TaskResult, palette: &Palette) -> serde_json::Result<String> {
    let body = serde_json::to_string_pretty(result)?;
    Ok(format!("{}\n{}\n", palette.paint(palette.heading, "Raw Result:"), body))
}
