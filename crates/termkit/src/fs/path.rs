//! Path string helpers
//!
//! Pure string splitting. Nothing here touches the tree.

use regex::Regex;
use std::sync::LazyLock;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// `(dirPath/)?filename` - the directory part keeps its trailing slash.
static FILE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*/)?([^/\n]*)$").expect("file path pattern is valid"));

/// Split a path into its `/`-separated segments.
///
/// Empty segments are kept: a leading empty segment marks an absolute path
/// and a trailing one marks a trailing slash.
///
/// ```ignore
/// assert_eq!(split_segments("/games/"), vec!["", "games", ""]);
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// A file path split into its directory and file name parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePath<'a> {
    /// Directory portion including its trailing `/`, if any.
    pub directory: Option<&'a str>,
    /// Final path component.
    pub name: &'a str,
}

/// Split a file path into directory and file name.
///
/// Returns `None` when the path does not name a file: the name after the
/// last `/` is empty, or the path contains a line break.
pub fn split_file_path(path: &str) -> Option<FilePath<'_>> {
    let captures = FILE_PATH.captures(path)?;
    let name = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    Some(FilePath {
        directory: captures.get(1).map(|m| m.as_str()),
        name,
    })
}
