use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Result, dashboard_error::DashboardError};

/// 简单的键值偏好存储
pub trait PreferenceStore: Send + Sync {
    fn get_bool(&self, key: &str) -> Result<Option<bool>>;

    fn set_bool(&self, key: &str, value: bool) -> Result<()>;
}

/// 以 JSON 对象文件保存偏好
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置：用户配置目录下的 agent-workshop/preferences.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("agent-workshop").join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(DashboardError::Preference(format!(
                "{} does not contain a JSON object (found {})",
                self.path.display(),
                other
            ))
            .into()),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let map = self.load()?;
        match map.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            // 兼容以字符串形式写入的 "true"/"false"
            Some(Value::String(s)) => Ok(Some(s == "true")),
            Some(other) => {
                warn!(key, value = %other, "Ignoring non-boolean preference");
                Ok(None)
            }
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::Bool(value));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        debug!(key, value, path = %self.path.display(), "Preference saved");
        Ok(())
    }
}

/// 内存中的偏好存储，进程退出即丢失
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, bool>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let values = self
            .values
            .read()
            .map_err(|_| DashboardError::Preference("store lock poisoned".into()))?;
        Ok(values.get(key).copied())
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| DashboardError::Preference("store lock poisoned".into()))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
