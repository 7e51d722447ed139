use std::{cmp::Ordering, fmt, str::FromStr, time::SystemTime};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{DirError, Result},
    path::{NormalizedPath, normalize},
};

/// Metadata captured for one directory entry.
///
/// `name` is always the non-empty suffix of `full_path` after its last
/// separator, and `full_path` never ends with a separator unless it is a
/// one-character root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntryDescriptor {
    full_path: NormalizedPath,
    name: String,
    modified_at: DateTime<Utc>,
    is_directory: bool,
}

impl EntryDescriptor {
    /// Build a descriptor from a raw path and already-queried metadata.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the path is empty or has no name
    /// component (a bare root).
    pub fn new(raw_path: &str, modified_at: DateTime<Utc>, is_directory: bool) -> Result<Self> {
        let full_path = normalize(raw_path)?;
        let name = full_path.basename();
        if name.is_empty() {
            return Err(DirError::invalid_argument(format!("'{full_path}' has no name component")));
        }
        let name = name.to_owned();
        Ok(Self { full_path, name, modified_at, is_directory })
    }

    /// Same as [`EntryDescriptor::new`], converting an OS timestamp to UTC.
    ///
    /// # Errors
    ///
    /// See [`EntryDescriptor::new`].
    pub fn from_system_time(raw_path: &str, modified: SystemTime, is_directory: bool) -> Result<Self> {
        Self::new(raw_path, DateTime::<Utc>::from(modified), is_directory)
    }

    #[must_use]
    pub fn full_path(&self) -> &str {
        self.full_path.as_str()
    }

    #[must_use]
    pub fn normalized_path(&self) -> &NormalizedPath {
        &self.full_path
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn modified_unix(&self) -> i64 {
        self.modified_at.timestamp()
    }

    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }
}

impl fmt::Display for EntryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_path())
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive ordering by full path.
pub fn cmp_path(a: &EntryDescriptor, b: &EntryDescriptor) -> Ordering {
    caseless_cmp(a.full_path(), b.full_path())
}

/// Case-insensitive ordering by base name.
pub fn cmp_name(a: &EntryDescriptor, b: &EntryDescriptor) -> Ordering {
    caseless_cmp(a.name(), b.name())
}

/// Oldest first.
pub fn cmp_modified(a: &EntryDescriptor, b: &EntryDescriptor) -> Ordering {
    a.modified_at.cmp(&b.modified_at)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Path,
    #[default]
    Name,
    #[serde(alias = "mtime")]
    Time,
}

impl SortKey {
    pub fn comparator(self) -> fn(&EntryDescriptor, &EntryDescriptor) -> Ordering {
        match self {
            Self::Path => cmp_path,
            Self::Name => cmp_name,
            Self::Time => cmp_modified,
        }
    }
}

impl FromStr for SortKey {
    type Err = DirError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "name" => Ok(Self::Name),
            "time" | "mtime" => Ok(Self::Time),
            other => Err(DirError::invalid_argument(format!("unknown sort key '{other}'"))),
        }
    }
}

/// Stable sort by `key`, descending when `reverse` is set.
pub fn sort_entries(entries: &mut [EntryDescriptor], key: SortKey, reverse: bool) {
    let cmp = key.comparator();
    if reverse {
        entries.sort_by(|a, b| cmp(b, a));
    } else {
        entries.sort_by(cmp);
    }
}
