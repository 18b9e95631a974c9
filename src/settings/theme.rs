use tracing::info;

use crate::{error::Result, settings::preferences::PreferenceStore};

/// 持久化暗色模式开关所用的键
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// 暗色模式状态：启动时显式读取，切换时显式写回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    dark_mode: bool,
}

impl ThemeState {
    /// 从存储读取开关，缺失时视为关闭
    pub fn init(store: &dyn PreferenceStore) -> Result<Self> {
        let dark_mode = store.get_bool(DARK_MODE_KEY)?.unwrap_or(false);
        Ok(Self { dark_mode })
    }

    /// 翻转开关并写回存储，返回新的状态
    pub fn toggle(&mut self, store: &dyn PreferenceStore) -> Result<bool> {
        let next = !self.dark_mode;
        store.set_bool(DARK_MODE_KEY, next)?;
        self.dark_mode = next;
        info!(dark_mode = next, "Theme toggled");
        Ok(next)
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode { Theme::Dark } else { Theme::Light }
    }
}

/// 文本输出用的配色，`plain` 不含任何 ANSI 转义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub muted: &'static str,
    pub completed: &'static str,
    pub warning: &'static str,
    pub failed: &'static str,
    pub accent: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            heading: "",
            muted: "",
            completed: "",
            warning: "",
            failed: "",
            accent: "",
            reset: "",
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: "\x1b[1;34m",
                muted: "\x1b[90m",
                completed: "\x1b[32m",
                warning: "\x1b[33m",
                failed: "\x1b[31m",
                accent: "\x1b[34m",
                reset: "\x1b[0m",
            },
            Theme::Dark => Self {
                heading: "\x1b[1;96m",
                muted: "\x1b[37m",
                completed: "\x1b[92m",
                warning: "\x1b[93m",
                failed: "\x1b[91m",
                accent: "\x1b[96m",
                reset: "\x1b[0m",
            },
        }
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", color, text, self.reset)
        }
    }
}
