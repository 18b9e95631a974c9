use std::fmt;

use serde::{Deserialize, Serialize};

/// 分数高于该值视为成功
pub const SUCCESS_THRESHOLD: f64 = 80.0;
/// 分数高于该值视为需要注意
pub const CAUTION_THRESHOLD: f64 = 50.0;

/// 单个条目的状态，由数据推导而来，不在负载中存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Warning,
    Failed,
}

impl Status {
    pub fn from_score(score: f64) -> Self {
        if score > SUCCESS_THRESHOLD {
            Status::Completed
        } else if score > CAUTION_THRESHOLD {
            Status::Warning
        } else {
            Status::Failed
        }
    }

    pub fn from_side_effects(side_effects: bool) -> Self {
        if side_effects {
            Status::Warning
        } else {
            Status::Completed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Warning => "warning",
            Status::Failed => "failed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Completed => "✓",
            Status::Warning => "⚠",
            Status::Failed => "✗",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(Status::from_score(81.0), Status::Completed);
        assert_eq!(Status::from_score(80.5), Status::Completed);
        assert_eq!(Status::from_score(80.0), Status::Warning);
        assert_eq!(Status::from_score(51.0), Status::Warning);
        assert_eq!(Status::from_score(50.0), Status::Failed);
        assert_eq!(Status::from_score(0.0), Status::Failed);
    }

    #[test]
    fn test_side_effects_status() {
        assert_eq!(Status::from_side_effects(true), Status::Warning);
        assert_eq!(Status::from_side_effects(false), Status::Completed);
        assert_eq!(Status::Warning.to_string(), "warning");
    }
}
