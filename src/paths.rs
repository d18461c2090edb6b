//! Directory layout rooted at the installation (or an injected) base directory.

use crate::constants::{DATA_DIR_NAME, LOGS_DIR_NAME, TEST_DIR_NAME};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub base_dir: PathBuf,
    pub data_dir: PathBuf,
    pub logging_dir: PathBuf,
    pub test_dir: PathBuf,
}

impl Paths {
    /// Derive the layout from `base`. Nothing is touched on disk.
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base_dir = base.into();
        let data_dir = base_dir.join(DATA_DIR_NAME);
        let logging_dir = base_dir.join(LOGS_DIR_NAME);
        let test_dir = data_dir.join(TEST_DIR_NAME);
        Paths {
            base_dir,
            data_dir,
            logging_dir,
            test_dir,
        }
    }

    /// Layout rooted at the directory this crate was built from.
    pub fn installed() -> Self {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let base = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        Self::from_base(base)
    }

    /// Use `base_override` when present, otherwise the installation root.
    /// Relative overrides are anchored at the current directory.
    pub fn resolve(base_override: Option<PathBuf>) -> io::Result<Self> {
        match base_override {
            Some(base) if base.is_absolute() => Ok(Self::from_base(base)),
            Some(base) => Ok(Self::from_base(env::current_dir()?.join(base))),
            None => Ok(Self::installed()),
        }
    }

    pub fn log_file(&self, name: &str) -> PathBuf {
        self.logging_dir.join(name)
    }
}
