//! String-based path model for the legacy scripts' filesystem view.
//!
//! Legacy scripts pass paths around as plain strings with mixed `/` and `\`
//! separators, so this model parses on both and re-serializes with one
//! configured separator. Parsing never fails: degenerate input degrades to
//! empty fields instead of erroring, and downstream script-loading code
//! relies on that.

use std::fmt;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '/';

/// A parsed absolute path: root prefix, directory segments, file name.
///
/// `.` and `..` markers are resolved away at construction. Operations take
/// `self` by value and return the updated path, so there is no shared
/// mutation of a path in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath {
    root: String,
    segments: Vec<String>,
    file_name: String,
    separator: char,
}

impl FilePath {
    /// Parse `raw` using the default `/` separator.
    pub fn new(raw: &str) -> Self {
        Self::with_separator(raw, DEFAULT_SEPARATOR)
    }

    /// Parse `raw`, rendering with `separator` from now on.
    ///
    /// Input is split on both `/` and `\` regardless of `separator`. The
    /// first token plus the separator becomes the root (so `/a/b` roots at
    /// `/` and `C:\x` roots at `C:` plus the separator), the last token
    /// becomes the file name, and everything between is resolved into
    /// segments.
    pub fn with_separator(raw: &str, separator: char) -> Self {
        let mut tokens: Vec<&str> = raw.split(['/', '\\']).collect();
        let root = match tokens.first() {
            Some(first) => format!("{first}{separator}"),
            None => separator.to_string(),
        };
        if !tokens.is_empty() {
            tokens.remove(0);
        }
        let file_name = tokens.pop().unwrap_or("").to_string();
        Self {
            root,
            segments: resolve(&tokens),
            file_name,
            separator,
        }
    }

    /// Drop the file name, leaving a directory path. Idempotent.
    #[must_use]
    pub fn to_dir(mut self) -> Self {
        self.file_name.clear();
        self
    }

    /// Go up one directory level. No-op on the root.
    #[must_use]
    pub fn up_dir(self) -> Self {
        let mut path = self.to_dir();
        path.segments.pop();
        path
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Empty when the path denotes a directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Collapse `.` and `..` markers in a single left-to-right pass.
///
/// `..` pops the last accepted segment and is a silent no-op when none
/// remain; `.` is skipped.
fn resolve(raw: &[&str]) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::with_capacity(raw.len());
    for segment in raw {
        match *segment {
            ".." => {
                resolved.pop();
            }
            "." => {}
            other => resolved.push(other.to_string()),
        }
    }
    resolved
}

impl fmt::Display for FilePath {
    /// Render `root + segments + file_name` with the configured separator.
    ///
    /// Pure function of current state; segments are already resolved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            f.write_str(segment)?;
            write!(f, "{}", self.separator)?;
        }
        f.write_str(&self.file_name)
    }
}

/// Substring after the last `/` or `\`; the whole string when neither occurs.
pub fn file_name_of(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Lower-cased substring after the last `.`.
///
/// A name with no dot returns the whole name lower-cased. That is the
/// documented contract, not a bug: callers filter on the result and a
/// dotless name simply never matches a real extension.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(i) => file_name[i + 1..].to_lowercase(),
        None => file_name.to_lowercase(),
    }
}

/// Everything before the last `/` or `\`; empty when neither occurs or the
/// separator sits at position 0.
pub fn directory_of(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(i) => &path[..i],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_dot_collapses_into_parent() {
        let path = FilePath::new("/a/b/../c/file.txt");
        assert_eq!(path.to_string(), "/a/c/file.txt");
    }

    #[test]
    fn single_dot_is_skipped() {
        let path = FilePath::new("/a/./b/file.txt");
        assert_eq!(path.to_string(), "/a/b/file.txt");
    }

    #[test]
    fn unmatched_dot_dot_is_a_no_op() {
        let path = FilePath::new("/../../a/file.txt");
        assert_eq!(path.segments(), ["a"]);
        assert_eq!(path.to_string(), "/a/file.txt");
    }

    #[test]
    fn mixed_separators_parse_and_render_with_configured_one() {
        let path = FilePath::new("/a\\b/file.txt");
        assert_eq!(path.to_string(), "/a/b/file.txt");

        let path = FilePath::with_separator("C:\\x\\y\\z.txt", '\\');
        assert_eq!(path.to_string(), "C:\\x\\y\\z.txt");
    }

    #[test]
    fn up_dir_twice_lands_two_levels_up() {
        let path = FilePath::new("/a/b/c/file.txt").up_dir().up_dir();
        assert_eq!(path.to_string(), "/a/");
    }

    #[test]
    fn up_dir_on_root_is_a_no_op() {
        let path = FilePath::new("/file.txt").up_dir().up_dir();
        assert_eq!(path.to_string(), "/");
    }

    #[test]
    fn to_dir_is_idempotent() {
        let once = FilePath::new("/a/b/file.txt").to_dir();
        let twice = once.clone().to_dir();
        assert_eq!(once, twice);
        assert_eq!(once.to_string(), "/a/b/");
    }

    #[test]
    fn trailing_separator_means_directory() {
        let path = FilePath::new("/a/b/");
        assert_eq!(path.file_name(), "");
        assert_eq!(path.to_string(), "/a/b/");
    }

    #[test]
    fn single_token_degrades_without_error() {
        // The first token always becomes the root; no file name remains.
        let path = FilePath::new("file.txt");
        assert_eq!(path.root(), "file.txt/");
        assert_eq!(path.file_name(), "");
        assert_eq!(path.to_string(), "file.txt/");
    }

    #[test]
    fn file_name_of_takes_last_component() {
        assert_eq!(file_name_of("/a/b/file.txt"), "file.txt");
        assert_eq!(file_name_of("a\\b\\file.txt"), "file.txt");
        assert_eq!(file_name_of("file.txt"), "file.txt");
    }

    #[test]
    fn extension_of_takes_last_dot_lower_cased() {
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("Main.JS"), "js");
        assert_eq!(extension_of("README"), "readme");
    }

    #[test]
    fn directory_of_stops_before_last_separator() {
        assert_eq!(directory_of("/a/b/file.txt"), "/a/b");
        assert_eq!(directory_of("file.txt"), "");
        assert_eq!(directory_of("/file.txt"), "");
    }
}
