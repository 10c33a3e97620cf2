// Hashing engine module
// Drives the classify -> enumerate -> hash -> write pipeline

use std::path::PathBuf;

use crate::digest::DigestComputer;
use crate::enumerate;
use crate::error::ManifestError;
use crate::manifest::{self, ManifestEntry};
use crate::output;
use crate::path_utils;
use crate::target::{self, TargetKind};

/// Summary of one completed run
#[derive(Debug)]
pub struct RunSummary {
    pub files_hashed: usize,
    pub files_skipped: usize,
    pub output_path: PathBuf,
}

/// Engine for hashing a target and writing its manifest
pub struct ManifestEngine {
    computer: DigestComputer,
}

impl ManifestEngine {
    pub fn new() -> Self {
        Self { computer: DigestComputer::new() }
    }

    /// Run the full pipeline for one target.
    ///
    /// Files are hashed strictly one at a time, in enumeration order; only
    /// the written manifest order is guaranteed sorted. A file that cannot
    /// be opened or read is skipped with a warning and the run continues;
    /// enumeration failures abort before anything is written.
    pub fn run(&self, target: &str, recursive: bool) -> Result<RunSummary, ManifestError> {
        let kind = target::classify(target)?;

        if recursive {
            match &kind {
                TargetKind::File(_) => {
                    eprintln!("warning: --recursive has no effect on a file target");
                }
                TargetKind::Wildcard { .. } => {
                    eprintln!("warning: --recursive has no effect on a wildcard target; matching is top-level only");
                }
                TargetKind::Directory(_) => {}
            }
        }

        let output_path = output::resolve_output_path(&kind);
        let enumeration = enumerate::enumerate(&kind, recursive, &output_path)?;

        let mut entries = Vec::with_capacity(enumeration.files.len());
        let mut files_skipped = 0;

        for file_path in &enumeration.files {
            match self.computer.compute_file(file_path) {
                Ok(digest_hex) => {
                    entries.push(ManifestEntry {
                        relative_path: path_utils::relative_to(file_path, &enumeration.base),
                        digest_hex,
                    });
                }
                Err(e) => {
                    eprintln!("warning: skipping {}: {}", file_path.display(), e);
                    files_skipped += 1;
                }
            }
        }

        manifest::write_manifest(&output_path, &mut entries)?;

        println!("Files hashed: {}", entries.len());
        if files_skipped > 0 {
            println!("Files skipped: {}", files_skipped);
        }
        println!("Output written to: {}", output_path.display());

        Ok(RunSummary {
            files_hashed: entries.len(),
            files_skipped,
            output_path,
        })
    }
}

impl Default for ManifestEngine {
    fn default() -> Self {
        Self::new()
    }
}
