use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::dashboard_error::DashboardError, utils::json_util::is_truthy};

/// 一次任务执行的完整结果：计划、逐步执行结果、总体评估
///
/// `plan`、`results`、`evaluation` 任一缺失都表示结果尚不可渲染，
/// 渲染前必须先调用 [`TaskResult::validate`]。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<PlanStep>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ExecutionResult>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub action: String,

    #[serde(default)]
    pub description: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub result: String,

    /// 耗时，单位分钟
    pub time_taken: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExecutionResult {
    /// 存在且为真值的 side_effects 视为需要警告
    pub fn has_side_effects(&self) -> bool {
        self.side_effects.as_ref().is_some_and(is_truthy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// 0 到 100，可以是小数
    pub score: f64,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub lessons: Vec<String>,

    /// improvements、recommendations 等后端附加字段，原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 通过校验后的结果视图，plan 与 results 一一对应
#[derive(Debug, Clone, Copy)]
pub struct ValidatedResult<'a> {
    pub plan: &'a [PlanStep],
    pub results: &'a [ExecutionResult],
    pub evaluation: &'a Evaluation,
}

impl TaskResult {
    pub fn validate(&self) -> Result<ValidatedResult<'_>, DashboardError> {
        let plan = self.plan.as_deref().ok_or(DashboardError::IncompleteResult("plan"))?;
        let results = self
            .results
            .as_deref()
            .ok_or(DashboardError::IncompleteResult("results"))?;
        let evaluation = self
            .evaluation
            .as_ref()
            .ok_or(DashboardError::IncompleteResult("evaluation"))?;

        if plan.len() != results.len() {
            return Err(DashboardError::InvalidResult(format!(
                "plan has {} steps but results has {} entries",
                plan.len(),
                results.len()
            )));
        }

        if let Some(index) = plan.iter().position(|step| step.action.trim().is_empty()) {
            return Err(DashboardError::InvalidResult(format!(
                "plan step {} has an empty action",
                index + 1
            )));
        }

        if let Some(index) = results
            .iter()
            .position(|r| !r.time_taken.is_finite() || r.time_taken < 0.0)
        {
            return Err(DashboardError::InvalidResult(format!(
                "result {} has an invalid time_taken",
                index + 1
            )));
        }

        if !evaluation.score.is_finite() || !(0.0..=100.0).contains(&evaluation.score) {
            return Err(DashboardError::InvalidResult(format!(
                "score {} is outside 0-100",
                evaluation.score
            )));
        }

        Ok(ValidatedResult {
            plan,
            results,
            evaluation,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> TaskResult {
        serde_json::from_value(json!({
            "task": "summarize",
            "plan": [{"action": "Read", "description": "d"}],
            "results": [{"result": "ok", "time_taken": 2}],
            "evaluation": {"score": 90, "summary": "good", "lessons": ["l1"], "improvements": "more tests"}
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_complete_result() {
        let result = sample();
        let validated = result.validate().unwrap();
        assert_eq!(validated.plan.len(), 1);
        assert_eq!(validated.results[0].time_taken, 2.0);
        assert_eq!(validated.evaluation.lessons, vec!["l1".to_string()]);
        assert_eq!(
            validated.evaluation.extra.get("improvements"),
            Some(&json!("more tests"))
        );
    }

    #[test]
    fn test_missing_parts_are_reported() {
        let mut result = sample();
        result.evaluation = None;
        assert!(matches!(
            result.validate(),
            Err(DashboardError::IncompleteResult("evaluation"))
        ));

        let result: TaskResult = serde_json::from_value(json!({"task": "x"})).unwrap();
        assert!(matches!(
            result.validate(),
            Err(DashboardError::IncompleteResult("plan"))
        ));
    }

    #[test]
    fn test_length_mismatch_is_invalid() {
        let mut result = sample();
        result.results = Some(Vec::new());
        assert!(matches!(
            result.validate(),
            Err(DashboardError::InvalidResult(_))
        ));
    }

    #[test]
    fn test_score_out_of_range_is_invalid() {
        let mut result = sample();
        if let Some(evaluation) = result.evaluation.as_mut() {
            evaluation.score = 100.5;
        }
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_side_effects_truthiness() {
        let parse = |v: Value| serde_json::from_value::<ExecutionResult>(v).unwrap();
        assert!(parse(json!({"result": "r", "time_taken": 1, "side_effects": true})).has_side_effects());
        assert!(parse(json!({"result": "r", "time_taken": 1, "side_effects": "wrote a file"})).has_side_effects());
        assert!(!parse(json!({"result": "r", "time_taken": 1, "side_effects": false})).has_side_effects());
        assert!(!parse(json!({"result": "r", "time_taken": 1})).has_side_effects());
    }

    #[test]
    fn test_raw_result_keeps_extra_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["evaluation"]["improvements"], json!("more tests"));
        assert!(value["results"][0].get("side_effects").is_none());
    }
}
