// Tests for error display and exit-code mapping

use std::io;
use std::path::PathBuf;

use deepsum::error::ManifestError;

#[test]
fn test_exit_code_mapping() {
    let invalid = ManifestError::InvalidTarget { target: "x".to_string() };
    assert_eq!(invalid.exit_code(), 2);

    let no_matches = ManifestError::NoMatches { pattern: "*.x".to_string() };
    assert_eq!(no_matches.exit_code(), 2);

    let bad_pattern = ManifestError::InvalidPattern {
        pattern: "a[".to_string(),
        reason: "unclosed character class".to_string(),
    };
    assert_eq!(bad_pattern.exit_code(), 2);

    let dir_read = ManifestError::DirectoryRead {
        path: PathBuf::from("/tmp/x"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(dir_read.exit_code(), 2);

    let write = ManifestError::ManifestWrite {
        path: PathBuf::from("/tmp/out.sha3"),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };
    assert_eq!(write.exit_code(), 3);

    let io_err = ManifestError::from_io_error(
        io::Error::new(io::ErrorKind::Other, "boom"),
        "reading",
        None,
    );
    assert_eq!(io_err.exit_code(), 3);
}

#[test]
fn test_display_names_the_offending_input() {
    let err = ManifestError::InvalidTarget { target: "ghost.txt".to_string() };
    assert!(err.to_string().contains("ghost.txt"));

    let err = ManifestError::NoMatches { pattern: "*.zzz".to_string() };
    assert!(err.to_string().contains("*.zzz"));

    let err = ManifestError::DirectoryRead {
        path: PathBuf::from("/locked/dir"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("/locked/dir"));
}

#[test]
fn test_io_variants_expose_source() {
    use std::error::Error;

    let err = ManifestError::from_io_error(
        io::Error::new(io::ErrorKind::Other, "boom"),
        "reading",
        Some(PathBuf::from("f.txt")),
    );
    assert!(err.source().is_some());

    let err = ManifestError::InvalidTarget { target: "x".to_string() };
    assert!(err.source().is_none());
}
