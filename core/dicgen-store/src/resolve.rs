use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, StoreError};

/// Finds the directory holding the user dictionary sources.
pub trait DicDirResolver {
    fn resolve(&self) -> Result<PathBuf>;
}

impl<R: DicDirResolver + ?Sized> DicDirResolver for Box<R> {
    fn resolve(&self) -> Result<PathBuf> {
        (**self).resolve()
    }
}

impl<R: DicDirResolver + ?Sized> DicDirResolver for &R {
    fn resolve(&self) -> Result<PathBuf> {
        (**self).resolve()
    }
}

/// A directory known up front.
#[derive(Debug, Clone)]
pub struct FixedDicDir(pub PathBuf);

impl FixedDicDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl DicDirResolver for FixedDicDir {
    fn resolve(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Asks `mecab-config --dicdir` and descends into `subdir`.
#[derive(Debug, Clone)]
pub struct MecabConfig {
    pub program: String,
    pub subdir: PathBuf,
}

impl Default for MecabConfig {
    fn default() -> Self {
        Self {
            program: "mecab-config".to_string(),
            subdir: PathBuf::from("original"),
        }
    }
}

impl MecabConfig {
    fn command_line(&self) -> String {
        format!("{} --dicdir", self.program)
    }
}

impl DicDirResolver for MecabConfig {
    fn resolve(&self) -> Result<PathBuf> {
        let output = Command::new(&self.program)
            .arg("--dicdir")
            .output()
            .map_err(|source| StoreError::Spawn {
                command: self.command_line(),
                source,
            })?;

        if !output.status.success() {
            return Err(StoreError::CommandFailed {
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let dicdir = std::str::from_utf8(&output.stdout)
            .ok()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::BadOutput {
                command: self.command_line(),
            })?;

        log::debug!("{} -> {}", self.command_line(), dicdir);
        Ok(Path::new(dicdir).join(&self.subdir))
    }
}
