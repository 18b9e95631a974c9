pub mod renderer;
pub mod stage;
pub mod status;
pub mod text;

pub use renderer::{DecisionProcessView, render};
pub use stage::{Marker, ProcessStep, SectionState, Stage, StageKind, StageLine};
pub use status::Status;
