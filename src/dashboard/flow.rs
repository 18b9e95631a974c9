use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    auth::Session,
    client::{RunTaskRequest, TaskApi},
    dashboard::state::{DashboardState, HISTORY_FETCH_FAILED, RUN_TASK_FAILED},
    error::{Result, dashboard_error::DashboardError},
    models::TaskResult,
    utils::json_util::{merge_overrides, parse_context},
    visualization::StageKind,
};

/// 任务提交与历史刷新的流程控制
///
/// 同一时间只允许一个提交在途，第二次提交会被直接拒绝，不会发起网络请求。
pub struct Dashboard<A: TaskApi> {
    api: Arc<A>,
    session: Session,
    state: Arc<RwLock<DashboardState>>,
    in_flight: Arc<AtomicBool>,
    overrides: Map<String, Value>,
}

impl<A: TaskApi> Clone for Dashboard<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            state: self.state.clone(),
            in_flight: self.in_flight.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

/// 离开作用域时释放在途标记
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: TaskApi> Dashboard<A> {
    pub fn new(api: Arc<A>, session: Session) -> Self {
        Self {
            api,
            session,
            state: Arc::new(RwLock::new(DashboardState::default())),
            in_flight: Arc::new(AtomicBool::new(false)),
            overrides: Map::new(),
        }
    }

    /// 提交时合并进上下文的键，例如 api、model
    pub fn with_overrides(mut self, overrides: Map<String, Value>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// 填写表单
    pub async fn set_form(&self, task: impl Into<String>, context: impl Into<String>) {
        let mut state = self.state.write().await;
        state.task = task.into();
        state.context = context.into();
    }

    pub async fn toggle_section(&self, kind: StageKind) {
        self.state.write().await.sections.toggle(kind);
    }

    pub async fn set_section_expanded(&self, kind: StageKind, expanded: bool) {
        self.state.write().await.sections.set_expanded(kind, expanded);
    }

    /// 当前状态快照，loading 取自在途标记
    pub async fn snapshot(&self) -> DashboardState {
        let mut state = self.state.read().await.clone();
        state.loading = self.is_submitting();
        state
    }

    /// 提交当前表单
    pub async fn submit(&self) -> Result<TaskResult> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Submit ignored, a task is already running");
            return Err(DashboardError::SubmissionInFlight.into());
        }
        let _guard = InFlightGuard(self.in_flight.clone());
        self.submit_inner().await
    }

    async fn submit_inner(&self) -> Result<TaskResult> {
        let submission_id = Uuid::new_v4().simple().to_string();
        let (task, context_text) = {
            let state = self.state.read().await;
            (state.task.clone(), state.context.clone())
        };

        let context = match self.build_context(&context_text) {
            Ok(context) => context,
            Err(e) => {
                error!(%submission_id, error = %e, "Context rejected before submission");
                self.state.write().await.set_banner(e.to_string());
                return Err(e.into());
            }
        };

        info!(%submission_id, task = %task, user = %self.session.user_id, "Running task");
        let request = RunTaskRequest::new(task, context, self.session.user_id.clone());
        let result = match self.api.run_task(&request, self.session.bearer_token()).await {
            Ok(result) => result,
            Err(e) => {
                error!(%submission_id, error = %e, "Task run failed");
                self.state.write().await.set_banner(RUN_TASK_FAILED);
                return Err(e);
            }
        };

        {
            let mut state = self.state.write().await;
            state.result = Some(result.clone());
            state.clear_banner();
        }
        info!(%submission_id, "Task completed");

        // 历史刷新失败只影响提示和历史列表，不影响本次结果
        if let Err(e) = self.refresh_history().await {
            warn!(%submission_id, error = %e, "History refresh after submission failed");
        }
        Ok(result)
    }

    fn build_context(&self, text: &str) -> std::result::Result<Value, DashboardError> {
        let mut context = parse_context(text)?;
        merge_overrides(&mut context, &self.overrides)?;
        Ok(context)
    }

    /// 重新拉取历史记录，失败时清空列表并设置提示
    pub async fn refresh_history(&self) -> Result<()> {
        match self.api.fetch_history().await {
            Ok(history) => {
                let mut state = self.state.write().await;
                info!(entries = history.len(), "Task history refreshed");
                state.history = history;
                state.history_refreshed_at = Some(chrono::Utc::now());
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch task history");
                let mut state = self.state.write().await;
                state.history.clear();
                state.set_banner(HISTORY_FETCH_FAILED);
                Err(e)
            }
        }
    }
}
