//! # pdirfile core
//!
//! Portable single-directory listing, recursive directory creation and
//! "open with" on top of the workspace's layered crates.
//!
//! The free functions use the native backend with the default
//! [`ListerConfig`]; build a [`DirFile`] to change either.
//!
//! ```no_run
//! use pdirfile_core::{ListOptions, list_directory, matchers::SuffixMatcher};
//!
//! let listing = list_directory("/tmp", ListOptions::empty(), Some(".txt"), Some(&SuffixMatcher))?;
//! for entry in &listing {
//!     println!("{} {}", entry.modified_at(), entry.full_path());
//! }
//! # Ok::<(), pdirfile_core::DirError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod facade;
pub mod matchers;

pub use facade::DirFile;
pub use pdirfile_infra::{DefaultBackend, SystemLauncher, default_backend};
pub use pdirfile_ports::{DirectoryBackend, DirectoryStream, Launcher, NameMatcher, RawMetadata};
pub use pdirfile_shared_kernel::{
    CreateOptions, DirError, EntryDescriptor, ErrorContext, ErrorKind, ListOptions, NormalizedPath,
    PATH_SEPARATOR, Result, SortKey, basename, cmp_modified, cmp_name, cmp_path, normalize, sort_entries,
};
pub use pdirfile_usecase::{
    DEFAULT_GROWTH_INCREMENT, DirectoryListing, ListerConfig, ListerConfigBuilder, ListingMode, ListingStats,
};

/// List `path` with the native backend and default configuration.
///
/// # Errors
///
/// `InvalidArgument` for an empty path, `NotFound`/`Unreadable` when the
/// directory cannot be opened, `AllocationFailed` when storage runs out.
pub fn list_directory(
    path: &str,
    options: ListOptions,
    pattern: Option<&str>,
    matcher: Option<&dyn NameMatcher>,
) -> Result<DirectoryListing> {
    DirFile::native().list_directory(path, options, pattern, matcher)
}

/// Create `path` with the native backend.
///
/// # Errors
///
/// `InvalidArgument` for an empty path, `AlreadyExists` with
/// `ERROR_IF_EXISTS`, `OsFailure` when a segment cannot be created.
pub fn create_directory(path: &str, options: CreateOptions) -> Result<()> {
    DirFile::native().create_directory(path, options)
}

/// Open `path` with `application`, or the platform default handler.
pub fn open_with(path: &str, application: Option<&str>) -> Result<()> {
    DirFile::native().open_with(path, application)
}

pub fn open_entry(entry: &EntryDescriptor, application: Option<&str>) -> Result<()> {
    DirFile::native().open_entry(entry, application)
}
