// crates/core/src/matchers.rs
//! Ready-made [`NameMatcher`] implementations.
//!
//! Every matcher here treats an absent pattern as "match everything".
//! The glob and regex matchers compile the last pattern they saw and reuse
//! it while the pattern string stays the same, which is the common case of
//! one pattern applied to every entry of a listing.

use std::cell::RefCell;

use globset::Glob;
use log::warn;
use pdirfile_ports::NameMatcher;
use regex::Regex;

/// Name ends with the pattern (`".txt"` selects text files).
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixMatcher;

impl NameMatcher for SuffixMatcher {
    fn matches(&self, name: &str, pattern: Option<&str>) -> bool {
        pattern.is_none_or(|suffix| name.ends_with(suffix))
    }
}

/// Case-insensitive substring test.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsMatcher;

impl NameMatcher for ContainsMatcher {
    fn matches(&self, name: &str, pattern: Option<&str>) -> bool {
        pattern.is_none_or(|needle| name.to_lowercase().contains(&needle.to_lowercase()))
    }
}

/// Last compiled pattern; `None` in the second slot marks a pattern that
/// failed to compile.
type Cached<T> = RefCell<Option<(String, Option<T>)>>;

fn with_compiled<T, C, M>(cache: &Cached<T>, pattern: &str, compile: C, test: M) -> bool
where
    C: FnOnce(&str) -> Option<T>,
    M: FnOnce(&T) -> bool,
{
    let mut slot = cache.borrow_mut();
    let stale = slot.as_ref().is_none_or(|(cached, _)| cached != pattern);
    if stale {
        *slot = Some((pattern.to_owned(), compile(pattern)));
    }
    match slot.as_ref() {
        Some((_, Some(compiled))) => test(compiled),
        _ => false,
    }
}

/// Shell-style glob on the entry name (`*.rs`, `data-??.csv`).
///
/// An invalid glob matches nothing.
#[derive(Debug, Default)]
pub struct GlobMatcher {
    cache: Cached<globset::GlobMatcher>,
}

impl GlobMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameMatcher for GlobMatcher {
    fn matches(&self, name: &str, pattern: Option<&str>) -> bool {
        let Some(pattern) = pattern else {
            return true;
        };
        with_compiled(
            &self.cache,
            pattern,
            |raw| match Glob::new(raw) {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(err) => {
                    warn!("invalid glob '{raw}': {err}");
                    None
                }
            },
            |glob| glob.is_match(name),
        )
    }
}

/// Regular expression searched anywhere in the entry name; anchor it with
/// `^`/`$` for a full match. An invalid expression matches nothing.
#[derive(Debug, Default)]
pub struct RegexMatcher {
    cache: Cached<Regex>,
}

impl RegexMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameMatcher for RegexMatcher {
    fn matches(&self, name: &str, pattern: Option<&str>) -> bool {
        let Some(pattern) = pattern else {
            return true;
        };
        with_compiled(
            &self.cache,
            pattern,
            |raw| match Regex::new(raw) {
                Ok(re) => Some(re),
                Err(err) => {
                    warn!("invalid regex '{raw}': {err}");
                    None
                }
            },
            |re| re.is_match(name),
        )
    }
}
