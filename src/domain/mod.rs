pub mod feature;
pub mod polygon;
pub mod style;

pub use feature::FeatureRecord;
pub use polygon::Polygon;
pub use style::PolyStyle;
