use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error};

use crate::{
    client::{RUN_TASK_PATH, RunTaskRequest, TASK_HISTORY_PATH, TaskApi},
    error::{Result, dashboard_error::DashboardError},
    models::{TaskHistoryEntry, TaskHistoryResponse, TaskResult},
    settings::AppConfig,
};

/// 基于 reqwest 的后端客户端
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    history_url: String,
    run_task_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            history_url: config.endpoint(TASK_HISTORY_PATH),
            run_task_url: config.endpoint(RUN_TASK_PATH),
        })
    }

    fn check_status(endpoint: &str, response: &Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        error!(endpoint, status = status.as_u16(), "Backend request failed");
        Err(DashboardError::RequestFailed {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        }
        .into())
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn fetch_history(&self) -> Result<Vec<TaskHistoryEntry>> {
        debug!(url = %self.history_url, "Fetching task history");
        let response = self.client.get(&self.history_url).send().await?;
        Self::check_status(TASK_HISTORY_PATH, &response)?;

        let body: TaskHistoryResponse = response.json().await?;
        debug!(entries = body.task_history.len(), "Task history received");
        Ok(body.task_history)
    }

    async fn run_task(&self, request: &RunTaskRequest, token: Option<&str>) -> Result<TaskResult> {
        debug!(url = %self.run_task_url, task = %request.task, "Submitting task");
        let mut builder = self.client.post(&self.run_task_url).json(request);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        Self::check_status(RUN_TASK_PATH, &response)?;

        let result: TaskResult = response.json().await?;
        Ok(result)
    }
}
