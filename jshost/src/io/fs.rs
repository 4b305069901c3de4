//! Filesystem facade backing the legacy `IO` primitives.
//!
//! The lister consumes only the narrow [`Vfs`] boundary (status + entry
//! listing), kept as a trait so tests can substitute an in-memory tree.
//! [`LocalFs`] implements it over `std::fs` and carries the pass-through
//! host operations legacy scripts call directly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// What the lister needs to know about a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStatus {
    pub is_directory: bool,
}

/// Filesystem boundary consumed by the tree lister.
pub trait Vfs {
    /// Status of `path`. Errors if the path does not exist.
    fn status_of(&self, path: &str) -> io::Result<EntryStatus>;

    /// Entry names of `dir`, in filesystem-dependent order.
    ///
    /// `.` and `..` are never produced.
    fn list_entries(&self, dir: &str) -> io::Result<Vec<String>>;
}

/// Text encoding for script sources read and written through the shim.
///
/// The legacy host selected a JVM charset by name; these are the two the
/// scripts actually used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

/// Host filesystem, configured with the encoding scripts are stored in.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    encoding: Encoding,
}

impl LocalFs {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Read a file, decoding with the configured encoding.
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        match self.encoding {
            Encoding::Utf8 => String::from_utf8(bytes)
                .with_context(|| format!("decode {} as utf-8", path.display())),
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }

    /// Write a file, creating parent directories, encoding with the
    /// configured encoding. Latin-1 replaces unencodable characters with `?`.
    pub fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let bytes = match self.encoding {
            Encoding::Utf8 => contents.as_bytes().to_vec(),
            Encoding::Latin1 => contents
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        };
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
    }

    /// Copy `src` into `dest_dir`, keeping its file name.
    pub fn copy_file(&self, src: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let name = src
            .file_name()
            .with_context(|| format!("copy source has no file name: {}", src.display()))?;
        let dest = dest_dir.join(name);
        fs::copy(src, &dest)
            .with_context(|| format!("copy {} to {}", src.display(), dest.display()))?;
        Ok(dest)
    }

    /// Create the directory chain named by `segments` (and return it).
    pub fn make_dirs(&self, segments: &[&str]) -> Result<PathBuf> {
        let path: PathBuf = segments.iter().collect();
        fs::create_dir_all(&path)
            .with_context(|| format!("create directory {}", path.display()))?;
        Ok(path)
    }
}

impl Vfs for LocalFs {
    fn status_of(&self, path: &str) -> io::Result<EntryStatus> {
        let meta = fs::metadata(path)?;
        Ok(EntryStatus {
            is_directory: meta.is_dir(),
        })
    }

    fn list_entries(&self, dir: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_round_trips_utf8() {
        let temp = tempfile::tempdir().expect("tempdir");
        let fs = LocalFs::new(Encoding::Utf8);
        let path = temp.path().join("out/script.js");

        fs.write_string(&path, "var x = 'é';\n").expect("write");
        assert_eq!(fs.read_to_string(&path).expect("read"), "var x = 'é';\n");
    }

    #[test]
    fn latin1_decodes_byte_per_char() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("legacy.js");
        std::fs::write(&path, [b'a', 0xE9, b'b']).expect("write bytes");

        let fs = LocalFs::new(Encoding::Latin1);
        assert_eq!(fs.read_to_string(&path).expect("read"), "aéb");
    }

    #[test]
    fn latin1_write_replaces_unencodable_chars() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("legacy.js");

        let fs = LocalFs::new(Encoding::Latin1);
        fs.write_string(&path, "aé€").expect("write");
        assert_eq!(std::fs::read(&path).expect("read"), [b'a', 0xE9, b'?']);
    }

    #[test]
    fn copy_file_keeps_name_in_dest_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        let fs = LocalFs::new(Encoding::Utf8);
        let src = temp.path().join("a.js");
        fs.write_string(&src, "// a\n").expect("write");
        let dest_dir = temp.path().join("out");
        std::fs::create_dir(&dest_dir).expect("mkdir");

        let dest = fs.copy_file(&src, &dest_dir).expect("copy");
        assert_eq!(dest, dest_dir.join("a.js"));
        assert!(fs.exists(&dest));
    }

    #[test]
    fn make_dirs_takes_segment_slice() {
        let temp = tempfile::tempdir().expect("tempdir");
        let fs = LocalFs::new(Encoding::Utf8);
        let root = temp.path().to_string_lossy().into_owned();

        let made = fs.make_dirs(&[root.as_str(), "a", "b"]).expect("make dirs");
        assert!(made.is_dir());
        assert_eq!(made, temp.path().join("a/b"));
    }

    #[test]
    fn status_of_missing_path_errors() {
        let temp = tempfile::tempdir().expect("tempdir");
        let fs = LocalFs::new(Encoding::Utf8);
        let missing = temp.path().join("missing");

        assert!(fs.status_of(&missing.to_string_lossy()).is_err());
    }
}
