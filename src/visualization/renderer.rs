use tracing::debug;

use crate::{
    error::dashboard_error::DashboardError,
    models::{TaskResult, ValidatedResult},
    utils::string_util::format_number,
    visualization::{
        stage::{Marker, ProcessStep, Stage, StageKind, StageLine},
        status::Status,
    },
};

/// 决策过程可视化的渲染结果，固定包含计划、执行、评估三个阶段
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionProcessView {
    pub stages: Vec<Stage>,
}

impl DecisionProcessView {
    pub const HEADING: &'static str = "Decision Process Visualization";

    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.kind == kind)
    }
}

/// 将结果转换为可视化视图
///
/// 没有结果时返回 `Ok(None)`，不渲染任何内容；结果存在但不完整时返回错误。
pub fn render(result: Option<&TaskResult>) -> Result<Option<DecisionProcessView>, DashboardError> {
    let Some(result) = result else {
        return Ok(None);
    };
    let validated = result.validate()?;
    debug!(
        steps = validated.plan.len(),
        score = validated.evaluation.score,
        "Rendering decision process"
    );

    Ok(Some(DecisionProcessView {
        stages: vec![
            planning_stage(&validated),
            execution_stage(&validated),
            evaluation_stage(&validated),
        ],
    }))
}

fn planning_stage(result: &ValidatedResult<'_>) -> Stage {
    let lines = result
        .plan
        .iter()
        .enumerate()
        .map(|(index, step)| StageLine {
            marker: Marker::Numbered(index + 1),
            step: ProcessStep {
                title: step.action.clone(),
                details: step.description.clone(),
                // 计划条目没有独立状态
                status: Status::Completed,
            },
        })
        .collect();

    Stage {
        kind: StageKind::Planning,
        lines,
        lessons: None,
    }
}

fn execution_stage(result: &ValidatedResult<'_>) -> Stage {
    let lines = result
        .results
        .iter()
        .enumerate()
        .map(|(index, execution)| StageLine {
            marker: Marker::Arrow,
            step: ProcessStep {
                title: format!("Step {} Execution", index + 1),
                details: format!(
                    "Result: {}. Time taken: {} minutes.",
                    execution.result,
                    format_number(execution.time_taken)
                ),
                status: Status::from_side_effects(execution.has_side_effects()),
            },
        })
        .collect();

    Stage {
        kind: StageKind::Execution,
        lines,
        lessons: None,
    }
}

fn evaluation_stage(result: &ValidatedResult<'_>) -> Stage {
    let evaluation = result.evaluation;
    Stage {
        kind: StageKind::Evaluation,
        lines: vec![StageLine {
            marker: Marker::None,
            step: ProcessStep {
                title: "Overall Evaluation".to_string(),
                details: format!(
                    "Score: {}. {}",
                    format_number(evaluation.score),
                    evaluation.summary
                ),
                status: Status::from_score(evaluation.score),
            },
        }],
        lessons: Some(evaluation.lessons.clone()),
    }
}
