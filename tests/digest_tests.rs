// Tests for the digest adapter
// Covers fixed width, determinism, and chunk-size independence

use std::fs;

use deepsum::digest::{DigestComputer, DIGEST_HEX_LEN};
use tempfile::tempdir;

#[test]
fn test_digest_fixed_width_lowercase() {
    let computer = DigestComputer::new();
    let digest = computer.compute_bytes(b"hello world");

    assert_eq!(digest.len(), DIGEST_HEX_LEN);
    assert_eq!(digest.len(), 128);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_digest_empty_input_known_vector() {
    // SHA3-512 of the empty string
    let computer = DigestComputer::new();
    assert_eq!(
        computer.compute_bytes(b""),
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
         15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
    );
}

#[test]
fn test_digest_deterministic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, b"some stable content").unwrap();

    let computer = DigestComputer::new();
    let first = computer.compute_file(&path).unwrap();
    let second = computer.compute_file(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_digest_distinct_inputs() {
    let computer = DigestComputer::new();
    assert_ne!(computer.compute_bytes(b"a"), computer.compute_bytes(b"b"));
}

#[test]
fn test_streaming_matches_single_block() {
    // A file larger than the chunk size must hash identically whether
    // streamed in tiny chunks or hashed as one in-memory block
    let dir = tempdir().unwrap();
    let path = dir.path().join("large.bin");
    let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &data).unwrap();

    let streamed = DigestComputer::with_buffer_size(7).compute_file(&path).unwrap();
    let chunked = DigestComputer::with_buffer_size(4096).compute_file(&path).unwrap();
    let single = DigestComputer::new().compute_bytes(&data);

    assert_eq!(streamed, single);
    assert_eq!(chunked, single);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let computer = DigestComputer::new();
    let result = computer.compute_file(&dir.path().join("absent.bin"));
    assert!(result.is_err());
}
