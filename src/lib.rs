// Library module for deepsum
// Re-exports modules for use in integration tests and external crates

pub mod digest;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod manifest;
pub mod output;
pub mod path_utils;
pub mod target;

// Re-export commonly used types for convenience
pub use digest::{DigestComputer, DIGEST_HEX_LEN, DIGEST_SIZE};
pub use engine::{ManifestEngine, RunSummary};
pub use enumerate::Enumeration;
pub use error::ManifestError;
pub use manifest::ManifestEntry;
pub use target::TargetKind;
