// Enumeration module
// Expands a classified target into the list of files to hash

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ManifestError;
use crate::target::TargetKind;

/// The files selected for hashing and the base directory against which
/// their manifest-relative paths are computed
#[derive(Debug)]
pub struct Enumeration {
    pub base: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Enumerate the files for a classified target.
///
/// `recursive` only affects directory targets; wildcard matching is always
/// top-level. `exclude` is the resolved output manifest path, which is never
/// enumerated as an input even if a prior run left one behind.
///
/// Any enumeration failure aborts the whole operation; no partial manifest
/// is written in that case.
pub fn enumerate(
    target: &TargetKind,
    recursive: bool,
    exclude: &Path,
) -> Result<Enumeration, ManifestError> {
    match target {
        TargetKind::File(path) => {
            let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("/"));
            Ok(Enumeration { base, files: vec![path.clone()] })
        }
        TargetKind::Wildcard { base_dir, pattern } => {
            let files = match_pattern(base_dir, pattern, exclude)?;
            if files.is_empty() {
                return Err(ManifestError::NoMatches { pattern: pattern.clone() });
            }
            Ok(Enumeration { base: base_dir.clone(), files })
        }
        TargetKind::Directory(dir) => {
            let files = if recursive {
                walk_directory(dir, exclude)?
            } else {
                list_directory(dir, exclude)?
            };
            Ok(Enumeration { base: dir.clone(), files })
        }
    }
}

/// Match regular files directly inside `base_dir` whose name matches the
/// shell-glob pattern. Never descends into subdirectories.
fn match_pattern(
    base_dir: &Path,
    pattern: &str,
    exclude: &Path,
) -> Result<Vec<PathBuf>, ManifestError> {
    let matcher = glob::Pattern::new(pattern).map_err(|e| ManifestError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in read_dir_entries(base_dir)? {
        let (path, file_type) = entry;
        if !file_type.is_file() || path == exclude {
            continue;
        }
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if matcher.matches(&name) {
            files.push(path);
        }
    }
    Ok(files)
}

/// List regular files directly inside `dir` (non-recursive)
fn list_directory(dir: &Path, exclude: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let mut files = Vec::new();
    for (path, file_type) in read_dir_entries(dir)? {
        if file_type.is_file() && path != exclude {
            files.push(path);
        }
    }
    Ok(files)
}

/// List regular files in the full subtree rooted at `dir`
fn walk_directory(dir: &Path, exclude: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if entry.file_type().is_file() && entry.path() != exclude {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read a directory, collecting each entry's path and file type
fn read_dir_entries(dir: &Path) -> Result<Vec<(PathBuf, fs::FileType)>, ManifestError> {
    let read_dir = fs::read_dir(dir).map_err(|e| ManifestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ManifestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| ManifestError::DirectoryRead {
            path: entry.path(),
            source: e,
        })?;
        entries.push((entry.path(), file_type));
    }
    Ok(entries)
}

fn walk_error(root: &Path, err: walkdir::Error) -> ManifestError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
    ManifestError::DirectoryRead { path, source }
}
