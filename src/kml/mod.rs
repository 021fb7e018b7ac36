pub mod parser;
pub mod writer;

pub use parser::{best_name, collect_polygons, parse_coordinates};
pub use writer::write_kml;
