use std::path::Path;

use readiness_core::Result;

/// Base names accepted as dataset documentation.
pub const VALID_DOC_NAMES: [&str; 5] = [
    "dataset_metadata",
    "readme",
    "data_description",
    "data_description_file",
    "data_attributes",
];

/// Extensions accepted for documentation files.
pub const VALID_DOC_EXTENSIONS: [&str; 4] = ["txt", "json", "md", "csv"];

/// Whether the dataset directory contains a documentation file: a
/// whitelisted base name (or any name containing `metadata`) with a
/// whitelisted extension.
pub fn check_documentation_presence(directory: &Path) -> Result<bool> {
    if !directory.is_dir() {
        return Ok(false);
    }
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        let stem = stem.to_lowercase();
        let ext = ext.to_lowercase();
        if VALID_DOC_EXTENSIONS.iter().any(|valid| *valid == ext)
            && (VALID_DOC_NAMES.iter().any(|valid| *valid == stem) || stem.contains("metadata"))
        {
            return Ok(true);
        }
    }
    Ok(false)
}
