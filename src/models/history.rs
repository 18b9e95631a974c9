use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /task_history` 的响应体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskHistoryResponse {
    /// 必须存在，缺失视为获取失败
    pub task_history: Vec<TaskHistoryEntry>,
}

/// 后端保存的一条历史记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    /// 通常是对象，但评估失败时后端可能写入任意值
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl TaskHistoryEntry {
    /// 评估分数，缺失或不是数字时返回 None
    pub fn score(&self) -> Option<f64> {
        self.evaluation
            .as_ref()
            .and_then(|evaluation| evaluation.get("score"))
            .and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_history_entry_score() {
        let response: TaskHistoryResponse = serde_json::from_value(json!({
            "task_history": [
                {"task": "a", "evaluation": {"score": 72.5, "summary": "s"}, "context": {}},
                {"task": "b", "evaluation": {"summary": "no score"}},
                {"task": "c", "evaluation": {"score": "high"}},
                {"task": "d"}
            ]
        }))
        .unwrap();

        let scores: Vec<_> = response.task_history.iter().map(TaskHistoryEntry::score).collect();
        assert_eq!(scores, vec![Some(72.5), None, None, None]);
    }

    #[test]
    fn test_non_object_evaluation_only_loses_that_entry() {
        let response: TaskHistoryResponse = serde_json::from_value(json!({
            "task_history": [
                {"evaluation": {"score": 90}},
                {"evaluation": "evaluation failed"},
                {"evaluation": [1, 2]},
                {"evaluation": null}
            ]
        }))
        .unwrap();

        let scores: Vec<_> = response.task_history.iter().map(TaskHistoryEntry::score).collect();
        assert_eq!(scores, vec![Some(90.0), None, None, None]);
    }

    #[test]
    fn test_missing_history_key_is_rejected() {
        assert!(serde_json::from_value::<TaskHistoryResponse>(json!({"detail": "oops"})).is_err());
        assert!(serde_json::from_value::<TaskHistoryResponse>(json!({"task_history": null})).is_err());
    }
}
