// Target classification module
// Decides whether the positional argument names a file, a wildcard
// pattern, or a directory

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::path_utils;

/// The classified target, with all paths resolved to absolute, cleaned form
#[derive(Debug, Clone, PartialEq)]
pub enum TargetKind {
    /// An existing regular file
    File(PathBuf),
    /// A wildcard pattern, split into its base directory and the
    /// file-name pattern matched against entries of that directory
    Wildcard { base_dir: PathBuf, pattern: String },
    /// An existing directory
    Directory(PathBuf),
}

/// Check if a string contains a wildcard metacharacter
pub fn contains_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?')
}

/// Classify the target string, in priority order:
/// existing regular file, then wildcard pattern, then existing directory.
///
/// The order matters: a literal path with no metacharacters that happens
/// not to exist is invalid, not a degenerate wildcard. A path that exists
/// as a regular file wins even if its name contains metacharacters.
pub fn classify(target: &str) -> Result<TargetKind, ManifestError> {
    let path = Path::new(target);

    if path.is_file() {
        let absolute = path_utils::absolute(path)
            .map_err(|e| ManifestError::from_io_error(e, "resolving target", Some(path.to_path_buf())))?;
        return Ok(TargetKind::File(absolute));
    }

    if contains_wildcard(target) {
        return split_pattern(path);
    }

    if path.is_dir() {
        let absolute = path_utils::absolute(path)
            .map_err(|e| ManifestError::from_io_error(e, "resolving target", Some(path.to_path_buf())))?;
        return Ok(TargetKind::Directory(absolute));
    }

    Err(ManifestError::InvalidTarget { target: target.to_string() })
}

/// Split a wildcard target into (absolute base directory, name pattern).
/// A bare pattern with no directory component anchors to the current
/// working directory.
fn split_pattern(path: &Path) -> Result<TargetKind, ManifestError> {
    let pattern = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            return Err(ManifestError::InvalidPattern {
                pattern: path.to_string_lossy().into_owned(),
                reason: "pattern has no file name component".to_string(),
            });
        }
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let base_dir = path_utils::absolute(&parent)
        .map_err(|e| ManifestError::from_io_error(e, "resolving pattern base", Some(parent.clone())))?;

    Ok(TargetKind::Wildcard { base_dir, pattern })
}
