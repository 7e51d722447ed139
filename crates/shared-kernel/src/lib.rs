// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DirError, ErrorContext, ErrorKind, Result};

pub mod error;
pub mod path;
pub mod value_objects;

pub use path::{NormalizedPath, PATH_SEPARATOR, basename, normalize};
pub use value_objects::{
    CreateOptions, EntryDescriptor, ListOptions, SortKey, cmp_modified, cmp_name, cmp_path, sort_entries,
};
