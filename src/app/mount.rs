use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use crate::error::{Result, dashboard_error::DashboardError};

/// 渲染内容的输出位置
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MountTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl MountTarget {
    /// 启动检查：文件所在目录必须已存在
    pub fn check(&self) -> Result<()> {
        match self {
            MountTarget::Stdout => Ok(()),
            MountTarget::File(path) => {
                let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
                match parent {
                    Some(dir) if !dir.is_dir() => {
                        Err(DashboardError::MountPointMissing(dir.display().to_string()).into())
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            MountTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
            MountTarget::File(path) => fs::write(path, content)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target = MountTarget::File(dir.path().join("missing").join("out.txt"));
        assert!(matches!(
            target.check(),
            Err(crate::error::Error::DashboardError(DashboardError::MountPointMissing(_)))
        ));
    }

    #[test]
    fn test_file_target_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let target = MountTarget::File(path.clone());
        target.check().unwrap();
        target.write("hello").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");

        assert!(MountTarget::File(PathBuf::from("relative.txt")).check().is_ok());
        assert!(MountTarget::Stdout.check().is_ok());
    }
}
