/// A polygon boundary parsed from a district KML file.
///
/// Rings are `(longitude, latitude)` pairs kept exactly as read from the
/// source - no ring closure or winding order is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub outer: Vec<(f64, f64)>,
    pub inners: Vec<Vec<(f64, f64)>>,
}

impl Polygon {
    pub fn new(outer: Vec<(f64, f64)>) -> Self {
        Self {
            outer,
            inners: Vec::new(),
        }
    }

    pub fn with_inners(outer: Vec<(f64, f64)>, inners: Vec<Vec<(f64, f64)>>) -> Self {
        Self { outer, inners }
    }
}
