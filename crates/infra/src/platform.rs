//! Platform-specific implementations of the filesystem port.
//!
//! This module centralizes OS-specific logic so the lister and creator never
//! see a conditional compilation directive. Each target gets its own backend
//! type, and [`DefaultBackend`] names the one selected for this build.

use std::{fs, io};

use log::warn;
use pdirfile_ports::{DirectoryBackend, DirectoryStream, RawMetadata};
use pdirfile_shared_kernel::{DirError, Result};

// ============================================================================
// Shared std-based primitives
// ============================================================================

/// Directory handle backed by `std::fs::ReadDir`.
///
/// `ReadDir` cannot be repositioned, so rewinding reopens the directory.
#[derive(Debug)]
pub struct NativeDirectoryStream {
    path: String,
    inner: fs::ReadDir,
}

impl NativeDirectoryStream {
    fn open(path: &str) -> Result<Self> {
        let inner = fs::read_dir(path).map_err(|source| DirError::from_open(path, source))?;
        Ok(Self { path: path.to_owned(), inner })
    }
}

impl DirectoryStream for NativeDirectoryStream {
    fn read_next(&mut self) -> Result<Option<String>> {
        for entry in self.inner.by_ref() {
            let entry = entry.map_err(|source| DirError::os_failure("read_dir", &self.path, source))?;
            match entry.file_name().into_string() {
                Ok(name) => return Ok(Some(name)),
                Err(raw) => warn!("skipping entry {raw:?} in '{}': name is not valid UTF-8", self.path),
            }
        }
        Ok(None)
    }

    fn rewind(&mut self) -> Result<()> {
        self.inner = fs::read_dir(&self.path).map_err(|source| DirError::from_open(&self.path, source))?;
        Ok(())
    }
}

fn query_metadata(path: &str) -> Result<RawMetadata> {
    let unavailable = |source: io::Error| DirError::MetadataUnavailable { path: path.to_owned(), source };
    let metadata = fs::metadata(path).map_err(unavailable)?;
    let modified = metadata.modified().map_err(unavailable)?;
    Ok(RawMetadata { modified, is_directory: metadata.is_dir() })
}

fn map_create_error(path: &str, source: io::Error) -> DirError {
    if source.kind() == io::ErrorKind::AlreadyExists {
        DirError::AlreadyExists { path: path.to_owned() }
    } else {
        DirError::os_failure("create_dir", path, source)
    }
}

// ============================================================================
// Unix
// ============================================================================

/// `opendir`/`stat`/`mkdir` backend.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixBackend;

#[cfg(unix)]
impl DirectoryBackend for UnixBackend {
    type Stream = NativeDirectoryStream;

    fn open_directory(&self, path: &str) -> Result<Self::Stream> {
        NativeDirectoryStream::open(path)
    }

    fn query_metadata(&self, path: &str) -> Result<RawMetadata> {
        query_metadata(path)
    }

    fn create_directory(&self, path: &str) -> Result<()> {
        use std::os::unix::fs::DirBuilderExt;

        // rwx for everyone, narrowed by the process umask.
        fs::DirBuilder::new().mode(0o777).create(path).map_err(|source| map_create_error(path, source))
    }
}

// ============================================================================
// Windows
// ============================================================================

/// `FindFirstFileW`/`CreateDirectoryW` backend. Paths are converted between
/// UTF-8 and UTF-16 by the standard library on every call.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsBackend;

#[cfg(windows)]
impl DirectoryBackend for WindowsBackend {
    type Stream = NativeDirectoryStream;

    fn open_directory(&self, path: &str) -> Result<Self::Stream> {
        NativeDirectoryStream::open(path)
    }

    fn query_metadata(&self, path: &str) -> Result<RawMetadata> {
        query_metadata(path)
    }

    fn create_directory(&self, path: &str) -> Result<()> {
        const ERROR_ALREADY_EXISTS: i32 = 183;

        fs::create_dir(path).map_err(|source| {
            if source.raw_os_error() == Some(ERROR_ALREADY_EXISTS) {
                DirError::AlreadyExists { path: path.to_owned() }
            } else {
                map_create_error(path, source)
            }
        })
    }
}

// ============================================================================
// Fallback
// ============================================================================

/// Plain `std::fs` backend for targets that are neither Unix nor Windows.
#[cfg(all(not(unix), not(windows)))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackBackend;

#[cfg(all(not(unix), not(windows)))]
impl DirectoryBackend for FallbackBackend {
    type Stream = NativeDirectoryStream;

    fn open_directory(&self, path: &str) -> Result<Self::Stream> {
        NativeDirectoryStream::open(path)
    }

    fn query_metadata(&self, path: &str) -> Result<RawMetadata> {
        query_metadata(path)
    }

    fn create_directory(&self, path: &str) -> Result<()> {
        fs::create_dir(path).map_err(|source| map_create_error(path, source))
    }
}

/// Default backend for the current platform.
#[cfg(unix)]
pub type DefaultBackend = UnixBackend;

#[cfg(windows)]
pub type DefaultBackend = WindowsBackend;

#[cfg(all(not(unix), not(windows)))]
pub type DefaultBackend = FallbackBackend;

/// Create the default backend for the current platform.
pub fn default_backend() -> DefaultBackend {
    #[cfg(unix)]
    return UnixBackend;

    #[cfg(windows)]
    return WindowsBackend;

    #[cfg(all(not(unix), not(windows)))]
    return FallbackBackend;
}
