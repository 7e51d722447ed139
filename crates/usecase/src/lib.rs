//! # Use Cases
//!
//! Directory operations written once against the [`pdirfile_ports`] traits:
//!
//! - [`lister`]: enumerate one directory into a [`DirectoryListing`]
//! - [`creator`]: create a directory, optionally with all missing ancestors
//! - [`config`]: lister tunables
//!
//! Use cases depend on ports and the shared kernel, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod creator;
pub mod lister;
pub mod listing;

pub use config::{DEFAULT_GROWTH_INCREMENT, ListerConfig, ListerConfigBuilder};
pub use creator::CreateDirectory;
pub use lister::{ListDirectory, entry_matches};
pub use listing::{DirectoryListing, ListingMode, ListingStats};
