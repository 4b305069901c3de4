//! Script discovery glue replacing the legacy `includeDir` primitive.
//!
//! The legacy bootstrap walked a directory for script files and fed each one
//! to the engine's `load`. Here the engine side is a caller-supplied loader
//! closure, so the glue stays independent of any particular script runtime.

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::path::{extension_of, file_name_of};
use crate::io::fs::Vfs;
use crate::io::lister::TreeLister;

/// Discover scripts under `dir` and pass each to `loader`, in listing order.
///
/// Only files whose extension matches `extension` (case-insensitive, no dot)
/// are loaded. A loader error aborts the pass; like the lister, there is no
/// partial-result recovery. Returns the number of scripts loaded.
pub fn include_dir<F: Vfs>(
    lister: &TreeLister<'_, F>,
    dir: &str,
    max_depth: usize,
    extension: &str,
    mut loader: impl FnMut(&str) -> Result<()>,
) -> Result<usize> {
    let files = lister
        .list(dir, max_depth)
        .with_context(|| format!("list scripts under {dir}"))?;
    let wanted = extension.to_lowercase();
    let mut loaded = 0;
    for file in &files {
        if extension_of(file_name_of(file)) != wanted {
            continue;
        }
        loader(file).with_context(|| format!("load script {file}"))?;
        debug!(script = %file, "loaded script");
        loaded += 1;
    }
    Ok(loaded)
}
