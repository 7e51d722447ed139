//! Separator canonicalization and base-name extraction.
//!
//! Paths cross the library boundary as UTF-8 strings. By default every `\` is
//! rewritten to `/` so that listings look the same on every platform; building
//! with the `native-separators` feature keeps the platform separator instead.

use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::{DirError, Result};

/// Separator used in every normalized path produced by this build.
#[cfg(not(feature = "native-separators"))]
pub const PATH_SEPARATOR: char = '/';

#[cfg(feature = "native-separators")]
pub const PATH_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Returns true for either separator style, regardless of build mode.
pub const fn is_any_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// A path with canonical separators and no trailing separator (except a lone root).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn basename(&self) -> &str {
        basename(&self.0)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize separators and strip trailing separators.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty path.
pub fn normalize(path: &str) -> Result<NormalizedPath> {
    if path.is_empty() {
        return Err(DirError::invalid_argument("path must not be empty"));
    }

    #[cfg(not(feature = "native-separators"))]
    let mut canonical = path.replace('\\', "/");
    #[cfg(feature = "native-separators")]
    let mut canonical = path.to_owned();

    while canonical.len() > 1 && canonical.ends_with(PATH_SEPARATOR) {
        canonical.pop();
    }

    Ok(NormalizedPath(canonical))
}

/// Everything after the last separator, or the whole path when there is none.
pub fn basename(path: &str) -> &str {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => &path[idx + PATH_SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// Build the path of `name` inside `dir`, inserting a separator only when needed.
pub fn join_child(dir: &str, name: &str) -> String {
    let mut joined = String::with_capacity(dir.len() + name.len() + 1);
    joined.push_str(dir);
    if !joined.ends_with(PATH_SEPARATOR) {
        joined.push(PATH_SEPARATOR);
    }
    joined.push_str(name);
    joined
}
