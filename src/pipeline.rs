use crate::domain::{FeatureRecord, PolyStyle};
use crate::error::NormalizeError;
use crate::kml::{best_name, collect_polygons, write_kml};
use crate::slug::slugify;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of a successfully normalized file.
#[derive(Debug)]
pub struct Normalized {
    pub source_path: PathBuf,
    pub slug: String,
    pub output_path: PathBuf,
}

/// Tracks which source file produced each slug across a run.
///
/// Slug collisions are last-write-wins on disk; the tracker lets the run
/// report which earlier source had its output replaced.
#[derive(Debug, Default)]
pub struct SlugTracker {
    sources: HashMap<String, PathBuf>,
}

impl SlugTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a written file. Returns the source that previously produced
    /// the same slug, if any.
    pub fn record(&mut self, normalized: &Normalized) -> Option<PathBuf> {
        self.sources
            .insert(normalized.slug.clone(), normalized.source_path.clone())
    }
}

/// Normalize one district KML file into the output directory.
///
/// Parses the source, extracts its polygons, resolves name and slug, and
/// writes `{output_dir}/{slug}.kml`. Any error here is per-file: the caller
/// warns and moves on to the next input.
pub fn normalize_kml_file(
    src: &Path,
    output_dir: &Path,
    style: &PolyStyle,
) -> Result<Normalized, NormalizeError> {
    let contents =
        std::fs::read_to_string(src).map_err(|e| NormalizeError::parse(src, e))?;
    let doc =
        roxmltree::Document::parse(&contents).map_err(|e| NormalizeError::parse(src, e))?;

    let polygons = collect_polygons(&doc);
    if polygons.is_empty() {
        return Err(NormalizeError::NoGeometryFound(src.to_path_buf()));
    }

    let fallback = src
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("distrito");
    let display_name = best_name(&doc, fallback);
    let slug = slugify(&display_name);

    let record = FeatureRecord {
        source_path: src.to_path_buf(),
        display_name,
        slug,
        polygons,
    };

    let output_path = output_dir.join(format!("{}.kml", record.slug));
    write_kml(&output_path, &record, style)?;

    Ok(Normalized {
        source_path: record.source_path,
        slug: record.slug,
        output_path,
    })
}
