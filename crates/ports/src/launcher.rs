// crates/ports/src/launcher.rs
use pdirfile_shared_kernel::Result;

/// Port for handing a path to an external program.
pub trait Launcher {
    /// Open `path` with `application`, or with the platform default handler.
    fn open(&self, path: &str, application: Option<&str>) -> Result<()>;
}
