//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory enumeration, metadata and single-directory creation
//! - [`matching`]: entry-name predicates used while listing
//! - [`launcher`]: opening a path with an external application
//!
//! The lister and creator are written once against these traits; each
//! platform supplies its own implementation.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod launcher;
pub mod matching;

pub use filesystem::{DirectoryBackend, DirectoryStream, RawMetadata};
pub use launcher::Launcher;
pub use matching::NameMatcher;
