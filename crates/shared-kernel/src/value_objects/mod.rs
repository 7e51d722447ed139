// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry;
pub mod flags;

pub use entry::{EntryDescriptor, SortKey, cmp_modified, cmp_name, cmp_path, sort_entries};
pub use flags::{CreateOptions, ListOptions};
