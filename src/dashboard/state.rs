use chrono::{DateTime, Utc};

use crate::{
    models::{TaskHistoryEntry, TaskResult},
    visualization::SectionState,
};

pub const RUN_TASK_FAILED: &str = "Failed to run task.";
pub const HISTORY_FETCH_FAILED: &str = "Failed to load task history.";

/// 仪表盘的会话内视图状态，不做任何持久化
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// 表单：任务描述
    pub task: String,
    /// 表单：上下文 JSON 文本
    pub context: String,
    /// 最近一次成功提交的结果
    pub result: Option<TaskResult>,
    pub history: Vec<TaskHistoryEntry>,
    pub history_refreshed_at: Option<DateTime<Utc>>,
    /// 提交进行中，按钮处于禁用状态
    pub loading: bool,
    /// 唯一的错误提示位
    pub banner: Option<String>,
    pub sections: SectionState,
}

impl DashboardState {
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Running..." } else { "Run Task" }
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }
}
