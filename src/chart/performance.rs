use serde::Serialize;
use tracing::warn;

use crate::models::TaskHistoryEntry;

/// 折线图上的一个点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformancePoint {
    /// 在历史列表中的位置，从 1 开始
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// 由历史记录生成分数序列
///
/// 缺少数字分数的记录会被跳过，其余点保留原始序号，标签与历史列表对齐。
pub fn performance_series(history: &[TaskHistoryEntry]) -> Vec<PerformancePoint> {
    history
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let index = i + 1;
            match entry.score() {
                Some(score) => Some(PerformancePoint {
                    index,
                    name: format!("Task {}", index),
                    score,
                }),
                None => {
                    warn!(index, task = ?entry.task, "History entry has no score, skipping");
                    None
                }
            }
        })
        .collect()
}
