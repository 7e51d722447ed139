// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod launcher;
pub mod platform;

pub use launcher::SystemLauncher;
pub use platform::{DefaultBackend, NativeDirectoryStream, default_backend};
