//! Shim configuration stored as `jshost.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::fs::Encoding;

/// Shim configuration (TOML).
///
/// Intended to be edited by humans; missing fields default to the values the
/// legacy environment assumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShimConfig {
    /// Separator used when rendering paths produced by the shim.
    pub separator: char,

    /// Extension (without the dot) of script files discovered by
    /// `include_dir`.
    pub script_extension: String,

    /// Directory levels `include_dir` may descend below its start.
    pub include_depth: usize,

    /// Encoding of script sources read and written through the shim.
    pub encoding: Encoding,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            separator: '/',
            script_extension: "js".to_string(),
            include_depth: 1,
            encoding: Encoding::default(),
        }
    }
}

impl ShimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.separator != '/' && self.separator != '\\' {
            return Err(anyhow!("separator must be '/' or '\\'"));
        }
        if self.script_extension.is_empty() {
            return Err(anyhow!("script_extension must not be empty"));
        }
        if self.script_extension.starts_with('.') {
            return Err(anyhow!("script_extension must not include the dot"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ShimConfig::default()`.
pub fn load_config(path: &Path) -> Result<ShimConfig> {
    if !path.exists() {
        let cfg = ShimConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ShimConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ShimConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
