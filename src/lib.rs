pub mod app;
pub mod auth;
pub mod chart;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod settings;
pub mod utils;
pub mod visualization;
