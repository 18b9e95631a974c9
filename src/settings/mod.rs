pub mod config;
pub mod preferences;
pub mod theme;

pub use config::AppConfig;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{Palette, Theme, ThemeState};
