#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("missing configuration value: {0}")]
    MissingConfig(String),

    #[error("mount point not found: {0}")]
    MountPointMissing(String),

    #[error("context is not valid JSON: {0}")]
    InvalidContext(String),

    #[error("{endpoint} returned HTTP {status}")]
    RequestFailed { endpoint: String, status: u16 },

    #[error("task result is missing `{0}`")]
    IncompleteResult(&'static str),

    #[error("task result is invalid: {0}")]
    InvalidResult(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("a task submission is already running")]
    SubmissionInFlight,

    #[error("preference store error: {0}")]
    Preference(String),
}
