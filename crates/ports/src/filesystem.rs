// crates/ports/src/filesystem.rs
use std::time::SystemTime;

use pdirfile_shared_kernel::Result;

/// The subset of `stat` the lister needs for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMetadata {
    pub modified: SystemTime,
    pub is_directory: bool,
}

/// An open directory handle positioned somewhere in its entry sequence.
///
/// Dropping the stream closes the underlying handle.
pub trait DirectoryStream {
    /// Name of the next entry, or `None` once the directory is exhausted.
    ///
    /// `.` and `..` may be reported; filtering them is the caller's job.
    /// An error aborts the enumeration; no further names are read.
    fn read_next(&mut self) -> Result<Option<String>>;

    /// Reposition the stream before the first entry.
    fn rewind(&mut self) -> Result<()>;

    fn close(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}

/// Port over the platform filesystem primitives used by listing and creation.
pub trait DirectoryBackend {
    type Stream: DirectoryStream;

    /// Open `path` for enumeration.
    ///
    /// Fails with `NotFound` when the directory is missing or not a directory,
    /// and `Unreadable` for any other open failure.
    fn open_directory(&self, path: &str) -> Result<Self::Stream>;

    /// Query metadata, following symlinks the way `stat` does.
    fn query_metadata(&self, path: &str) -> Result<RawMetadata>;

    /// Create exactly one directory. An existing entry yields `AlreadyExists`.
    fn create_directory(&self, path: &str) -> Result<()>;
}

impl<B: DirectoryBackend + ?Sized> DirectoryBackend for &B {
    type Stream = B::Stream;

    fn open_directory(&self, path: &str) -> Result<Self::Stream> {
        (**self).open_directory(path)
    }

    fn query_metadata(&self, path: &str) -> Result<RawMetadata> {
        (**self).query_metadata(path)
    }

    fn create_directory(&self, path: &str) -> Result<()> {
        (**self).create_directory(path)
    }
}
