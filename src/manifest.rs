// Manifest writer module
// Sorts entries and writes the tab-separated manifest file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ManifestError;

/// One hashed file: its manifest-relative path and its hex digest
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub relative_path: String,
    pub digest_hex: String,
}

/// Sort entries ascending by relative path, comparing raw bytes.
/// Never locale-aware, never case-folding; the resulting order is
/// reproducible across runs and platforms.
pub fn sort_entries(entries: &mut [ManifestEntry]) {
    entries.sort_by(|a, b| a.relative_path.as_bytes().cmp(b.relative_path.as_bytes()));
}

/// Write the manifest, overwriting any existing file at `path`.
///
/// UTF-8 without a byte-order mark, one `<relativePath>\t<digestHex>\n`
/// line per entry, no header and no footer. Entries are sorted in place
/// before writing.
pub fn write_manifest(path: &Path, entries: &mut [ManifestEntry]) -> Result<(), ManifestError> {
    sort_entries(entries);

    let file = File::create(path).map_err(|e| ManifestError::ManifestWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for entry in entries.iter() {
        writeln!(writer, "{}\t{}", entry.relative_path, entry.digest_hex).map_err(|e| {
            ManifestError::ManifestWrite { path: path.to_path_buf(), source: e }
        })?;
    }

    writer.flush().map_err(|e| ManifestError::ManifestWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
