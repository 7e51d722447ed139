// crates/usecase/src/creator.rs
use log::{debug, info};
use pdirfile_ports::DirectoryBackend;
use pdirfile_shared_kernel::{CreateOptions, DirError, Result, path::is_any_separator};

pub struct CreateDirectory<'a, B: DirectoryBackend> {
    backend: &'a B,
}

impl<'a, B: DirectoryBackend> CreateDirectory<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Create `path`, and with `RECURSIVE` every missing ancestor first.
    ///
    /// An existing entry at `path` is success unless `ERROR_IF_EXISTS` is
    /// set; that flag only applies to the final path, never to its ancestors.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty path
    /// - `AlreadyExists` when `ERROR_IF_EXISTS` is set and `path` exists
    /// - `OsFailure` when any segment cannot be created
    pub fn run(&self, path: &str, options: CreateOptions) -> Result<()> {
        if path.is_empty() {
            return Err(DirError::invalid_argument("path must not be empty"));
        }
        let error_if_exists = options.contains(CreateOptions::ERROR_IF_EXISTS);

        if options.contains(CreateOptions::RECURSIVE) {
            for prefix in ancestor_prefixes(path) {
                self.create_ancestor(prefix)?;
            }
        }
        self.create_final(path, error_if_exists)
    }

    fn create_ancestor(&self, prefix: &str) -> Result<()> {
        match self.backend.create_directory(prefix) {
            Ok(()) => {
                info!("created directory '{prefix}'");
                Ok(())
            }
            Err(err) if err.is_already_exists() => {
                debug!("'{prefix}' already present");
                Ok(())
            }
            // Roots and drive letters may refuse creation with something other
            // than "already exists"; what matters is that a directory is there.
            Err(err) => match self.backend.query_metadata(prefix) {
                Ok(meta) if meta.is_directory => {
                    debug!("'{prefix}' refused creation but is a directory");
                    Ok(())
                }
                _ => Err(err),
            },
        }
    }

    fn create_final(&self, path: &str, error_if_exists: bool) -> Result<()> {
        match self.backend.create_directory(path) {
            Ok(()) => {
                info!("created directory '{path}'");
                Ok(())
            }
            Err(err) if err.is_already_exists() && !error_if_exists => {
                debug!("'{path}' already present");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Every prefix of `path` that ends at a separator, shortest first.
///
/// A single trailing separator is not a segment boundary.
pub fn ancestor_prefixes(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = match path.char_indices().last() {
        Some((idx, c)) if is_any_separator(c) => &path[..idx],
        _ => path,
    };
    trimmed
        .char_indices()
        .filter(|&(_, c)| is_any_separator(c))
        .map(move |(idx, c)| &trimmed[..idx + c.len_utf8()])
}
