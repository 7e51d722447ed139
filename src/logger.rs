// src/logger.rs
//! Minimal stderr backend for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no `-v`/`-q` flag is given.
pub const LOG_ENV: &str = "PDIRFILE_LOG";

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install a logger at `level`, falling back to `PDIRFILE_LOG` and then
    /// `warn`. Calling it twice keeps the first logger.
    pub fn init(level: Option<LevelFilter>) {
        let level = level.or_else(level_from_env).unwrap_or(LevelFilter::Warn);
        if log::set_boxed_logger(Box::new(Self::new(level))).is_ok() {
            log::set_max_level(level);
        }
    }
}

fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_ENV).ok()?.trim().parse().ok()
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}
