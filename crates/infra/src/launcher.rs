// crates/infra/src/launcher.rs
use std::process::Command;

use log::debug;
use pdirfile_ports::Launcher;
use pdirfile_shared_kernel::{DirError, Result};

/// Opens paths through the operating system's "open" mechanism.
///
/// Without an explicit application the platform handler is used
/// (`xdg-open`, `open` on macOS, `start` on Windows). The call blocks until
/// the launched command exits and succeeds only on a zero exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, path: &str, application: Option<&str>) -> Result<()> {
        if path.is_empty() {
            return Err(DirError::invalid_argument("path must not be empty"));
        }

        let (mut command, label) = match application {
            Some(app) => {
                let mut command = Command::new(app);
                command.arg(path);
                (command, app.to_owned())
            }
            None => (default_command(path), DEFAULT_HANDLER.to_owned()),
        };

        debug!("launching {command:?}");
        let status = command.status().map_err(|source| DirError::LaunchFailed {
            path: path.to_owned(),
            application: label.clone(),
            reason: "could not start".into(),
            source: Some(source),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DirError::LaunchFailed {
                path: path.to_owned(),
                application: label,
                reason: format!("exited with {status}"),
                source: None,
            })
        }
    }
}

#[cfg(windows)]
const DEFAULT_HANDLER: &str = "start";

#[cfg(target_os = "macos")]
const DEFAULT_HANDLER: &str = "open";

#[cfg(all(not(windows), not(target_os = "macos")))]
const DEFAULT_HANDLER: &str = "xdg-open";

#[cfg(windows)]
fn default_command(path: &str) -> Command {
    // `start` is a cmd builtin; the empty argument is the window title.
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(windows))]
fn default_command(path: &str) -> Command {
    let mut command = Command::new(DEFAULT_HANDLER);
    command.arg(path);
    command
}
