pub mod flow;
pub mod state;

pub use flow::Dashboard;
pub use state::{DashboardState, HISTORY_FETCH_FAILED, RUN_TASK_FAILED};
