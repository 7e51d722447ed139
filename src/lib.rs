// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod logger;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
