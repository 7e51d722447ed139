// crates/ports/src/matching.rs

/// Decides whether an entry name satisfies a caller-supplied pattern.
///
/// The pattern is opaque to the lister; it is whatever the matcher
/// understands (suffix, glob, regex, ...). It is `None` when the caller gave
/// no pattern and did not ask for absent patterns to match everything.
pub trait NameMatcher {
    fn matches(&self, name: &str, pattern: Option<&str>) -> bool;
}

impl<F> NameMatcher for F
where
    F: Fn(&str, Option<&str>) -> bool,
{
    fn matches(&self, name: &str, pattern: Option<&str>) -> bool {
        self(name, pattern)
    }
}
