use std::{collections::TryReserveError, fmt, io};

use thiserror::Error;

/// Coarse classification of every failure the library can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Unreadable,
    AlreadyExists,
    MetadataUnavailable,
    OsFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid argument",
            Self::NotFound => "not found",
            Self::Unreadable => "unreadable",
            Self::AlreadyExists => "already exists",
            Self::MetadataUnavailable => "metadata unavailable",
            Self::OsFailure => "os failure",
        };
        f.write_str(label)
    }
}

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DirError>,
    },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Directory '{path}' not found: {source}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Directory '{path}' cannot be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Directory '{path}' already exists")]
    AlreadyExists { path: String },

    #[error("Metadata unavailable for '{path}': {source}")]
    MetadataUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    OsFailure {
        operation: String,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to reserve room for {requested} entries: {source}")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Failed to open '{path}' with {application}: {reason}")]
    LaunchFailed {
        path: String,
        application: String,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },
}

pub type Result<T> = std::result::Result<T, DirError>;

impl DirError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }

    pub fn os_failure(operation: impl Into<String>, path: impl Into<String>, source: io::Error) -> Self {
        Self::OsFailure { operation: operation.into(), path: path.into(), source }
    }

    /// Classifies an error raised while opening a directory for enumeration.
    pub fn from_open(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => Self::NotFound { path, source },
            _ => Self::Unreadable { path, source },
        }
    }

    /// The classification of this error; context wrappers report their source's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::InvalidArgument { .. } | Self::InvalidConfiguration { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Unreadable { .. } => ErrorKind::Unreadable,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::MetadataUnavailable { .. } => ErrorKind::MetadataUnavailable,
            Self::OsFailure { .. } | Self::AllocationFailed { .. } | Self::LaunchFailed { .. } => {
                ErrorKind::OsFailure
            }
        }
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DirError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DirError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DirError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
