use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run or skip a single input file.
///
/// The first two variants are directory-level preconditions checked before
/// any output is written and are fatal. The remaining variants are per-file:
/// the file is skipped with a warning and the batch keeps going.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("input directory not found: {}", .0.display())]
    InputDirectoryMissing(PathBuf),

    #[error("no KML files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("no polygons in {}", .0.display())]
    NoGeometryFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NormalizeError {
    pub fn parse(path: &std::path::Path, cause: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: cause.to_string(),
        }
    }
}
