// crates/usecase/src/listing.rs
use std::slice;

use pdirfile_shared_kernel::{EntryDescriptor, SortKey, sort_entries};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingMode {
    PreCounted,
    Growable,
}

/// How a listing was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    pub mode: ListingMode,
    /// Full enumerations of the directory (1 or 2).
    pub passes: u8,
    /// Matches seen by the counting pass, if there was one.
    pub counted: Option<usize>,
    /// Times a growable listing had to extend its storage.
    pub growth_steps: usize,
    /// Matching entries dropped because their metadata could not be read.
    pub skipped: usize,
}

impl ListingStats {
    pub(crate) fn new(mode: ListingMode) -> Self {
        Self { mode, passes: 0, counted: None, growth_steps: 0, skipped: 0 }
    }
}

/// Entries found in one directory, in enumeration order unless sorted.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    entries: Vec<EntryDescriptor>,
    stats: ListingStats,
}

impl DirectoryListing {
    pub(crate) fn new(entries: Vec<EntryDescriptor>, stats: ListingStats) -> Self {
        Self { entries, stats }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[EntryDescriptor] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, EntryDescriptor> {
        self.entries.iter()
    }

    #[must_use]
    pub fn stats(&self) -> &ListingStats {
        &self.stats
    }

    /// Storage actually held by the listing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn sort(&mut self, key: SortKey, reverse: bool) {
        sort_entries(&mut self.entries, key, reverse);
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&EntryDescriptor, &EntryDescriptor) -> std::cmp::Ordering,
    {
        self.entries.sort_by(compare);
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<EntryDescriptor> {
        self.entries
    }
}

impl IntoIterator for DirectoryListing {
    type Item = EntryDescriptor;
    type IntoIter = std::vec::IntoIter<EntryDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DirectoryListing {
    type Item = &'a EntryDescriptor;
    type IntoIter = slice::Iter<'a, EntryDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
