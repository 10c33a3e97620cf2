// Path utilities for cross-platform path handling
// Provides lexical cleaning, cwd anchoring, and relative path computation

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve a path to its absolute, cleaned form.
/// Relative paths are anchored to the current working directory. The result
/// is cleaned lexically; symlinks are not resolved and the path need not
/// exist. Trailing separators are dropped as a side effect of cleaning.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(clean_path(&joined))
}

/// Clean a path by removing redundant components like "." and ".."
/// without requiring the path to exist
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {
                continue;
            }
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                    continue;
                }
                components.push(component);
            }
            _ => {
                components.push(component);
            }
        }
    }

    let mut result = PathBuf::new();
    for component in components {
        result.push(component);
    }

    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

/// Compute the manifest-relative form of `path` against `base`.
/// Falls back to the full path when it does not live under the base.
pub fn relative_to(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
