//! Bounded-depth enumeration of script files under a directory.

use std::io;

use thiserror::Error;

use crate::io::fs::Vfs;

/// Errors surfaced by [`TreeLister::list`]. Both abort the traversal; there
/// is no partial-result recovery.
#[derive(Debug, Error)]
pub enum ListError {
    /// The traversal root does not exist.
    #[error("path not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A directory or entry could not be read mid-traversal.
    #[error("failed to read {path}")]
    ReadFailure {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Depth-first file lister over a [`Vfs`].
///
/// Each `list` call owns its own accumulator; the lister itself holds no
/// state beyond the facade and the separator used to render results.
pub struct TreeLister<'a, F: Vfs> {
    fs: &'a F,
    separator: char,
}

impl<'a, F: Vfs> TreeLister<'a, F> {
    pub fn new(fs: &'a F, separator: char) -> Self {
        Self { fs, separator }
    }

    /// List non-hidden files under `start`, descending at most `max_depth`
    /// directory levels below it.
    ///
    /// A `start` that is a plain file yields itself, at any depth. A
    /// directory sitting at the depth bound is omitted entirely rather than
    /// listed as a leaf; the file/directory asymmetry is the legacy
    /// recursion guard and is kept as-is. Entry order within a directory is
    /// filesystem-dependent and undefined.
    ///
    /// Symbolic-link cycles are not detected; callers must not point the
    /// traversal at cyclic structures.
    pub fn list(&self, start: &str, max_depth: usize) -> Result<Vec<String>, ListError> {
        let status = self
            .fs
            .status_of(start)
            .map_err(|source| ListError::NotFound {
                path: start.to_string(),
                source,
            })?;
        if !status.is_directory {
            return Ok(vec![start.to_string()]);
        }
        let mut files = Vec::new();
        self.walk(start, 1, max_depth, &mut files)?;
        Ok(files)
    }

    fn walk(
        &self,
        dir: &str,
        level: usize,
        max_depth: usize,
        files: &mut Vec<String>,
    ) -> Result<(), ListError> {
        let entries = self
            .fs
            .list_entries(dir)
            .map_err(|source| ListError::ReadFailure {
                path: dir.to_string(),
                source,
            })?;
        for name in entries {
            if is_hidden(&name) {
                continue;
            }
            let full = self.join(dir, &name);
            let status = self
                .fs
                .status_of(&full)
                .map_err(|source| ListError::ReadFailure {
                    path: full.clone(),
                    source,
                })?;
            if status.is_directory {
                if level < max_depth {
                    self.walk(&full, level + 1, max_depth, files)?;
                }
            } else {
                files.push(full);
            }
        }
        Ok(())
    }

    fn join(&self, prefix: &str, name: &str) -> String {
        if prefix.ends_with(self.separator) {
            format!("{prefix}{name}")
        } else {
            format!("{prefix}{sep}{name}", sep = self.separator)
        }
    }
}

/// Hidden entries start with `.` followed by a character that is not `.`,
/// `/`, or `\`. A lone `.` or a `..`-prefixed name is not hidden (the
/// underlying directory read never produces the literal `.`/`..` entries).
fn is_hidden(name: &str) -> bool {
    let mut chars = name.chars();
    if chars.next() != Some('.') {
        return false;
    }
    !matches!(chars.next(), Some('.' | '/' | '\\') | None)
}
