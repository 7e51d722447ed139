// crates/usecase/src/lister.rs
//! Single-directory enumeration.
//!
//! The default strategy walks the directory twice: once to count matching
//! names and once to build descriptors into storage of exactly that size.
//! With [`ListOptions::DONT_COUNT`] the directory is walked once and storage
//! grows by the configured increment whenever it fills up.
//!
//! Entries whose metadata cannot be read are skipped. Between the two passes
//! of a counted listing the directory may change; entries that vanish are
//! dropped and entries beyond the counted total are not collected.

use log::debug;
use pdirfile_ports::{DirectoryBackend, DirectoryStream, NameMatcher};
use pdirfile_shared_kernel::{
    DirError, EntryDescriptor, ListOptions, Result,
    path::{join_child, normalize},
};

use crate::{
    config::ListerConfig,
    listing::{DirectoryListing, ListingMode, ListingStats},
};

/// Whether `name` belongs in a listing.
///
/// `.` and `..` never match. The matcher is consulted when a pattern is
/// present, or when it is absent and `NULL_PATTERN_MATCHES` is not set;
/// otherwise every name matches.
pub fn entry_matches(
    name: &str,
    options: ListOptions,
    pattern: Option<&str>,
    matcher: Option<&dyn NameMatcher>,
) -> bool {
    if name == "." || name == ".." {
        return false;
    }
    match matcher {
        Some(m) if pattern.is_some() || !options.contains(ListOptions::NULL_PATTERN_MATCHES) => {
            m.matches(name, pattern)
        }
        _ => true,
    }
}

pub struct ListDirectory<'a, B: DirectoryBackend> {
    backend: &'a B,
    config: &'a ListerConfig,
}

impl<'a, B: DirectoryBackend> ListDirectory<'a, B> {
    pub fn new(backend: &'a B, config: &'a ListerConfig) -> Self {
        Self { backend, config }
    }

    /// List the entries of `path` that satisfy the match rule.
    ///
    /// A valid directory without matches yields an empty listing.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty path or an invalid configuration
    /// - `NotFound` / `Unreadable` when the directory cannot be opened
    /// - `OsFailure` when enumeration fails part way; no partial listing is returned
    /// - `AllocationFailed` when result storage cannot be reserved
    pub fn run(
        &self,
        path: &str,
        options: ListOptions,
        pattern: Option<&str>,
        matcher: Option<&dyn NameMatcher>,
    ) -> Result<DirectoryListing> {
        self.config.validate()?;
        let dir = normalize(path)?;
        // Open with a trailing separator so a bare drive like `C:` means its root.
        let mut stream = self.backend.open_directory(&join_child(dir.as_str(), ""))?;

        let filter = |name: &str| entry_matches(name, options, pattern, matcher);
        let listing = if options.pre_counted() {
            self.collect_counted(dir.as_str(), &mut stream, filter)
        } else {
            self.collect_growable(dir.as_str(), &mut stream, filter)
        };
        stream.close();

        let listing = listing?;
        debug!(
            "listed '{}': {} entries ({:?}, {} pass(es), {} growth step(s), {} skipped)",
            dir,
            listing.len(),
            listing.stats().mode,
            listing.stats().passes,
            listing.stats().growth_steps,
            listing.stats().skipped,
        );
        Ok(listing)
    }

    fn collect_counted<F>(&self, dir: &str, stream: &mut B::Stream, filter: F) -> Result<DirectoryListing>
    where
        F: Fn(&str) -> bool,
    {
        let mut stats = ListingStats::new(ListingMode::PreCounted);

        let mut expected = 0usize;
        while let Some(name) = stream.read_next()? {
            if filter(&name) {
                expected += 1;
            }
        }
        stats.passes = 1;
        stats.counted = Some(expected);

        if expected == 0 {
            return Ok(DirectoryListing::new(Vec::new(), stats));
        }

        stream.rewind()?;
        let mut entries = Vec::new();
        reserve(&mut entries, expected)?;

        while let Some(name) = stream.read_next()? {
            if !filter(&name) {
                continue;
            }
            if entries.len() == expected {
                debug!("'{dir}' gained entries after counting; ignoring '{name}' and the rest");
                break;
            }
            if let Some(entry) = self.describe(dir, &name, &mut stats) {
                entries.push(entry);
            }
        }
        stats.passes = 2;

        entries.shrink_to_fit();
        Ok(DirectoryListing::new(entries, stats))
    }

    fn collect_growable<F>(&self, dir: &str, stream: &mut B::Stream, filter: F) -> Result<DirectoryListing>
    where
        F: Fn(&str) -> bool,
    {
        let mut stats = ListingStats::new(ListingMode::Growable);
        let step = self.config.growth_increment;

        let mut entries = Vec::new();
        reserve(&mut entries, step)?;
        let mut reserved = step;

        while let Some(name) = stream.read_next()? {
            if !filter(&name) {
                continue;
            }
            let Some(entry) = self.describe(dir, &name, &mut stats) else {
                continue;
            };
            if entries.len() == reserved {
                reserve(&mut entries, step)?;
                reserved += step;
                stats.growth_steps += 1;
                debug!("grew listing of '{dir}' to {reserved} slots");
            }
            entries.push(entry);
        }
        stats.passes = 1;

        entries.shrink_to_fit();
        Ok(DirectoryListing::new(entries, stats))
    }

    fn describe(&self, dir: &str, name: &str, stats: &mut ListingStats) -> Option<EntryDescriptor> {
        let child = join_child(dir, name);
        let described = self
            .backend
            .query_metadata(&child)
            .and_then(|meta| EntryDescriptor::from_system_time(&child, meta.modified, meta.is_directory));
        match described {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping '{child}': {err}");
                stats.skipped += 1;
                None
            }
        }
    }
}

fn reserve(entries: &mut Vec<EntryDescriptor>, additional: usize) -> Result<()> {
    let requested = entries.len() + additional;
    entries
        .try_reserve_exact(additional)
        .map_err(|source| DirError::AllocationFailed { requested, source })
}
