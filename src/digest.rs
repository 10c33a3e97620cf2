// Digest adapter module
// Wraps the wide Keccak-family primitive behind a streaming interface

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha3::{Digest, Sha3_512};

use crate::error::ManifestError;

/// Digest size in bytes. SHA3-512 is the Keccak-family member with a
/// 1024-bit capacity; its 64-byte output formats to 128 hex characters.
pub const DIGEST_SIZE: usize = 64;

/// Fixed width of a formatted digest
pub const DIGEST_HEX_LEN: usize = 2 * DIGEST_SIZE;

/// Default streaming chunk size (1 MiB)
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Streaming adapter around the digest primitive.
/// Any compliant implementation of the same algorithm can replace the
/// inner state without affecting callers.
pub struct WideDigest(Sha3_512);

impl WideDigest {
    pub fn new() -> Self {
        WideDigest(Sha3_512::new())
    }

    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    pub fn finalize(self) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }
}

impl Default for WideDigest {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest computer with streaming I/O
pub struct DigestComputer {
    buffer_size: usize,
}

impl DigestComputer {
    /// Create a new DigestComputer with the default 1 MiB chunk size
    pub fn new() -> Self {
        Self { buffer_size: CHUNK_SIZE }
    }

    /// Create a new DigestComputer with a custom chunk size
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Compute the digest of a file using streaming I/O.
    ///
    /// Memory use is bounded by the chunk size, not the file size. The file
    /// handle is scoped to this call and released on success and failure
    /// alike. Returns the digest as lowercase hex, always 128 characters.
    pub fn compute_file(&self, path: &Path) -> Result<String, ManifestError> {
        let mut file = File::open(path).map_err(|e| {
            ManifestError::from_io_error(e, "opening", Some(path.to_path_buf()))
        })?;

        let mut hasher = WideDigest::new();
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            let bytes_read = file.read(&mut buffer).map_err(|e| {
                ManifestError::from_io_error(e, "reading", Some(path.to_path_buf()))
            })?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(bytes_to_hex(&hasher.finalize()))
    }

    /// Compute the digest of an in-memory block in one pass.
    /// Must agree with `compute_file` for the same bytes regardless of
    /// chunk size.
    pub fn compute_bytes(&self, data: &[u8]) -> String {
        let mut hasher = WideDigest::new();
        hasher.update(data);
        bytes_to_hex(&hasher.finalize())
    }
}

impl Default for DigestComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert bytes to a lowercase hexadecimal string
fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
