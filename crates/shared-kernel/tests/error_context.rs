// crates/shared-kernel/tests/error_context.rs
use std::io;

use pdirfile_shared_kernel::{DirError, ErrorContext, ErrorKind};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(|e| DirError::os_failure("mkdir", "/tmp/x", e))
        .context("creating workspace")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("creating workspace"));
    assert!(display.contains("File system operation failed: mkdir on '/tmp/x'"));
    assert_eq!(err.kind(), ErrorKind::OsFailure);
}

#[test]
fn with_context_is_lazy_and_nests() {
    let err = Err::<(), _>(DirError::invalid_argument("empty"))
        .with_context(|| "inner".to_string())
        .context("outer")
        .unwrap_err();

    assert_eq!(err.to_string(), "outer: inner: Invalid argument: empty");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
