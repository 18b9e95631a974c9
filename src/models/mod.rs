pub mod history;
pub mod task_result;

pub use history::{TaskHistoryEntry, TaskHistoryResponse};
pub use task_result::{Evaluation, ExecutionResult, PlanStep, TaskResult, ValidatedResult};
