pub mod http;
pub mod request;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{TaskHistoryEntry, TaskResult},
};

pub use http::HttpTaskApi;
pub use request::RunTaskRequest;

pub const TASK_HISTORY_PATH: &str = "task_history";
pub const RUN_TASK_PATH: &str = "run_task";

/// 任务执行后端的接口
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// 获取完整的历史记录，非 2xx 视为失败
    async fn fetch_history(&self) -> Result<Vec<TaskHistoryEntry>>;

    /// 提交任务，token 存在时以 Bearer 方式携带
    async fn run_task(&self, request: &RunTaskRequest, token: Option<&str>) -> Result<TaskResult>;
}
