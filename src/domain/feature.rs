use super::Polygon;
use std::path::PathBuf;

/// One input file's parsed geometry plus its resolved identity.
///
/// Built once per successfully parsed file and consumed by the writer;
/// nothing is shared across files.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub source_path: PathBuf,
    pub display_name: String,
    pub slug: String,
    pub polygons: Vec<Polygon>,
}
