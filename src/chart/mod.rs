pub mod performance;
pub mod plot;

pub use performance::{PerformancePoint, performance_series};
pub use plot::render_chart;
