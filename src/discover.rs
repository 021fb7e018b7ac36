use crate::error::NormalizeError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively find every `.kml` file under `root`.
///
/// The listing is sorted so runs are reproducible. Fails if the directory
/// is missing or contains no KML files; both conditions abort the batch
/// before any output is written.
pub fn find_kml_files(root: &Path) -> Result<Vec<PathBuf>, NormalizeError> {
    if !root.is_dir() {
        return Err(NormalizeError::InputDirectoryMissing(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_kml_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();

    if files.is_empty() {
        return Err(NormalizeError::NoInputFiles(root.to_path_buf()));
    }

    Ok(files)
}

fn has_kml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("kml"))
}
