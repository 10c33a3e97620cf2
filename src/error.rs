// Centralized error handling module
// Every variant maps to exactly one process exit code

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the manifest tool.
/// Provides context-rich messages with file paths and operations.
#[derive(Debug)]
pub enum ManifestError {
    /// Target resolution errors (exit 2)
    InvalidTarget { target: String },
    NoMatches { pattern: String },

    /// Enumeration errors (exit 2)
    InvalidPattern { pattern: String, reason: String },
    DirectoryRead { path: PathBuf, source: io::Error },

    /// Manifest output errors (exit 3)
    ManifestWrite { path: PathBuf, source: io::Error },

    /// Any other I/O failure with context (exit 3)
    Io { path: Option<PathBuf>, operation: String, source: io::Error },
}

impl ManifestError {
    /// Process exit code for this error, per the documented CLI contract:
    /// 2 for target/enumeration failures, 3 for unexpected fatal errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ManifestError::InvalidTarget { .. }
            | ManifestError::NoMatches { .. }
            | ManifestError::InvalidPattern { .. }
            | ManifestError::DirectoryRead { .. } => 2,
            ManifestError::ManifestWrite { .. } | ManifestError::Io { .. } => 3,
        }
    }

    /// Create an Io error with context about the operation and optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        ManifestError::Io {
            path,
            operation: operation.to_string(),
            source: err,
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManifestError::InvalidTarget { target } => {
                write!(f, "target is neither an existing file, a wildcard pattern, nor a directory: {}\n", target)?;
                write!(f, "Suggestion: Check that the path is spelled correctly and exists")
            }
            ManifestError::NoMatches { pattern } => {
                write!(f, "no files match pattern '{}'\n", pattern)?;
                write!(f, "Suggestion: Wildcard matching is top-level only and never descends into subdirectories")
            }
            ManifestError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid wildcard pattern '{}': {}", pattern, reason)
            }
            ManifestError::DirectoryRead { path, source } => {
                write!(f, "cannot enumerate directory {}: {}\n", path.display(), source)?;
                write!(f, "Suggestion: Check directory permissions")
            }
            ManifestError::ManifestWrite { path, source } => {
                write!(f, "failed to write manifest {}: {}\n", path.display(), source)?;
                write!(f, "Suggestion: Check disk space and write permissions")
            }
            ManifestError::Io { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} {}: {}", operation, p.display(), source)
                } else {
                    write!(f, "I/O error while {}: {}", operation, source)
                }
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::DirectoryRead { source, .. }
            | ManifestError::ManifestWrite { source, .. }
            | ManifestError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
