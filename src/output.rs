// Output path resolution module
// Derives the manifest location from the target kind

use std::path::PathBuf;

use crate::target::TargetKind;

/// Extension appended to every manifest file name
pub const MANIFEST_SUFFIX: &str = ".sha3";

/// Compute the manifest output path for a classified target.
///
/// File targets get a sibling `<name>.sha3`; wildcard targets get a
/// sanitized pattern name inside the pattern's base directory; directory
/// targets get a sibling `<dirname>.sha3` next to the directory itself.
/// Computed once per invocation.
pub fn resolve_output_path(target: &TargetKind) -> PathBuf {
    match target {
        TargetKind::File(path) => {
            let mut name = path.as_os_str().to_os_string();
            name.push(MANIFEST_SUFFIX);
            PathBuf::from(name)
        }
        TargetKind::Wildcard { base_dir, pattern } => {
            base_dir.join(format!("{}{}", sanitize_pattern(pattern), MANIFEST_SUFFIX))
        }
        TargetKind::Directory(dir) => {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "root".to_string());
            match dir.parent() {
                Some(parent) => parent.join(format!("{}{}", name, MANIFEST_SUFFIX)),
                None => dir.join(format!("{}{}", name, MANIFEST_SUFFIX)),
            }
        }
    }
}

/// Replace wildcard metacharacters and characters illegal in filenames on
/// common platforms with bracketed textual tokens, so the manifest name is
/// always a legal filename even when the pattern itself would not be.
pub fn sanitize_pattern(pattern: &str) -> String {
    let mut sanitized = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '*' => sanitized.push_str("[any]"),
            '?' => sanitized.push_str("[x]"),
            ':' => sanitized.push_str("[colon]"),
            '|' => sanitized.push_str("[pipe]"),
            '"' => sanitized.push_str("[quote]"),
            '<' => sanitized.push_str("[lt]"),
            '>' => sanitized.push_str("[gt]"),
            _ => sanitized.push(c),
        }
    }
    sanitized
}
