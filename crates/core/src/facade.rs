// crates/core/src/facade.rs
use pdirfile_infra::{DefaultBackend, SystemLauncher, default_backend};
use pdirfile_ports::{DirectoryBackend, Launcher, NameMatcher};
use pdirfile_shared_kernel::{CreateOptions, EntryDescriptor, ListOptions, Result};
use pdirfile_usecase::{CreateDirectory, DirectoryListing, ListDirectory, ListerConfig};

/// Directory operations bound to one backend, launcher and lister config.
///
/// [`DirFile::native`] uses the platform backend and launcher; tests and
/// embedders can supply their own through [`DirFile::new`].
#[derive(Debug, Clone, Default)]
pub struct DirFile<B = DefaultBackend, L = SystemLauncher> {
    backend: B,
    launcher: L,
    config: ListerConfig,
}

impl DirFile {
    pub fn native() -> Self {
        Self::new(default_backend(), SystemLauncher::new(), ListerConfig::default())
    }
}

impl<B, L> DirFile<B, L>
where
    B: DirectoryBackend,
    L: Launcher,
{
    pub fn new(backend: B, launcher: L, config: ListerConfig) -> Self {
        Self { backend, launcher, config }
    }

    #[must_use]
    pub fn with_config(mut self, config: ListerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// List the entries of `path` selected by `pattern` and `matcher`.
    ///
    /// # Errors
    ///
    /// See [`ListDirectory::run`].
    pub fn list_directory(
        &self,
        path: &str,
        options: ListOptions,
        pattern: Option<&str>,
        matcher: Option<&dyn NameMatcher>,
    ) -> Result<DirectoryListing> {
        ListDirectory::new(&self.backend, &self.config).run(path, options, pattern, matcher)
    }

    /// # Errors
    ///
    /// See [`CreateDirectory::run`].
    pub fn create_directory(&self, path: &str, options: CreateOptions) -> Result<()> {
        CreateDirectory::new(&self.backend).run(path, options)
    }

    /// Open `path` with `application`, or the platform's default handler.
    pub fn open_with(&self, path: &str, application: Option<&str>) -> Result<()> {
        self.launcher.open(path, application)
    }

    pub fn open_entry(&self, entry: &EntryDescriptor, application: Option<&str>) -> Result<()> {
        self.open_with(entry.full_path(), application)
    }
}
