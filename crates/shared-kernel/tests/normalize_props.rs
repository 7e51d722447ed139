// crates/shared-kernel/tests/normalize_props.rs
use pdirfile_shared_kernel::{PATH_SEPARATOR, basename, normalize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[a-zA-Z0-9_ ./\\\\]{1,64}") {
        let once = normalize(&raw).unwrap();
        let twice = normalize(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn basename_of_normalized_has_no_separator(raw in "\\PC{1,64}") {
        let p = normalize(&raw).unwrap();
        prop_assert!(!basename(p.as_str()).contains(PATH_SEPARATOR));
    }

    #[test]
    fn normalized_never_ends_in_separator_unless_root(raw in "[ab/\\\\]{1,32}") {
        let p = normalize(&raw).unwrap();
        prop_assert!(!p.is_empty());
        if p.len() > 1 {
            prop_assert!(!p.as_str().ends_with(PATH_SEPARATOR));
        }
    }
}

#[cfg(not(feature = "native-separators"))]
proptest! {
    #[test]
    fn normalized_contains_no_backslash(raw in "\\PC{1,64}") {
        let p = normalize(&raw).unwrap();
        prop_assert!(!p.as_str().contains('\\'));
    }
}
