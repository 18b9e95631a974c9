use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::dashboard_error::DashboardError;

/// 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 后端地址，例如 http://localhost:8000
    pub api_url: String,
    /// 认证服务的 publishable key，启动时必须存在
    pub publishable_key: Option<String>,
    /// 当前登录用户
    pub user_id: Option<String>,
    /// Bearer token，可选
    pub token: Option<String>,
    /// 偏好文件路径，缺省时使用用户配置目录
    pub preferences_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            publishable_key: None,
            user_id: None,
            token: None,
            preferences_path: None,
            request_timeout_secs: 300,
            log_level: "info".to_string(),
            color: true,
        }
    }
}

impl AppConfig {
    /// 启动前检查，缺少认证配置时直接中止
    pub fn validate(&self) -> Result<(), DashboardError> {
        match self.publishable_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {}
            _ => return Err(DashboardError::MissingConfig("publishable key".into())),
        }
        if self.api_url.trim().is_empty() {
            return Err(DashboardError::MissingConfig("api url".into()));
        }
        Ok(())
    }

    /// 拼接接口地址，忽略多余的斜杠
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
