use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /run_task` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTaskRequest {
    pub task: String,

    pub context: Value,

    #[serde(rename = "userId")]
    pub user_id: String,
}

impl RunTaskRequest {
    pub fn new(task: impl Into<String>, context: Value, user_id: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            context,
            user_id: user_id.into(),
        }
    }
}
