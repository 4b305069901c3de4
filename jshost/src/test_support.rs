//! Test-only helpers for building script trees on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Temp directory seeded with files and subdirectories for lister tests.
pub struct ScriptTree {
    dir: tempfile::TempDir,
}

impl ScriptTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn root_str(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Create `rel` (and any parent directories) with stub contents.
    pub fn file(&self, rel: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, "// stub\n").with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Create the directory `rel` (and any parents), empty.
    pub fn dir(&self, rel: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path)
            .with_context(|| format!("create directory {}", path.display()))?;
        Ok(path)
    }
}
