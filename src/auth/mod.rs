pub mod guard;
pub mod session;

pub use guard::{Access, Route, View, resolve};
pub use session::Session;
