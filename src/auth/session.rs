use crate::settings::AppConfig;

/// 已登录用户的会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, token: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token,
        }
    }

    /// 配置中有用户 ID 即视为已登录，空 token 按未提供处理
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let user_id = config.user_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        let token = config
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Some(Self::new(user_id, token))
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_config() {
        let config = AppConfig {
            user_id: Some("user_1".into()),
            token: Some("".into()),
            ..AppConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.user_id, "user_1");
        assert_eq!(session.bearer_token(), None);

        let config = AppConfig {
            user_id: Some("  ".into()),
            token: Some("tok".into()),
            ..AppConfig::default()
        };
        assert!(Session::from_config(&config).is_none());
    }
}
