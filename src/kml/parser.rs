use crate::domain::Polygon;
use roxmltree::{Document, Node};

/// Namespace-agnostic element match: input files declare KML namespaces in
/// every style imaginable, so only the local tag name is compared.
fn is_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Text of the first `LinearRing`/`coordinates` child chain under `parent`.
fn ring_text<'a>(parent: Node<'a, '_>) -> Option<&'a str> {
    parent
        .children()
        .find(|n| is_named(n, "LinearRing"))
        .and_then(|ring| ring.children().find(|n| is_named(n, "coordinates")))
        .and_then(|coords| coords.text())
}

/// First `coordinates` text of any `LinearRing` below `poly`, used when a
/// polygon has no well-formed outer boundary element.
fn any_ring_text<'a>(poly: Node<'a, '_>) -> Option<&'a str> {
    poly.descendants()
        .filter(|n| is_named(n, "LinearRing"))
        .find_map(|ring| {
            ring.children()
                .find(|n| is_named(n, "coordinates"))
                .and_then(|coords| coords.text())
        })
}

/// Parse a KML coordinate list into `(longitude, latitude)` pairs.
///
/// Tokens are separated by arbitrary whitespace; fields within a token by
/// commas. An altitude field is ignored. Tokens that do not yield two valid
/// floats are skipped without affecting their siblings - partial corruption
/// in a ring is tolerated.
pub fn parse_coordinates(text: &str) -> Vec<(f64, f64)> {
    text.split_whitespace()
        .filter_map(|token| {
            let mut fields = token.split(',');
            let lon: f64 = fields.next()?.parse().ok()?;
            let lat: f64 = fields.next()?.parse().ok()?;
            Some((lon, lat))
        })
        .collect()
}

/// Extract every polygon in the document, in document order.
///
/// The outer ring comes from the conventional
/// `outerBoundaryIs/LinearRing/coordinates` path when its text is non-blank,
/// else from the first `LinearRing` anywhere under the polygon. Polygons
/// whose outer ring parses to zero points are dropped.
pub fn collect_polygons(doc: &Document) -> Vec<Polygon> {
    let mut polygons = Vec::new();

    for poly in doc.descendants().filter(|n| is_named(n, "Polygon")) {
        let outer_text = poly
            .descendants()
            .filter(|n| is_named(n, "outerBoundaryIs"))
            .find_map(ring_text)
            .filter(|t| !t.trim().is_empty())
            .or_else(|| any_ring_text(poly));

        let Some(outer_text) = outer_text else {
            continue;
        };
        let outer = parse_coordinates(outer_text);
        if outer.is_empty() {
            continue;
        }

        let inners: Vec<Vec<(f64, f64)>> = poly
            .descendants()
            .filter(|n| is_named(n, "innerBoundaryIs"))
            .filter_map(ring_text)
            .filter(|t| !t.trim().is_empty())
            .map(parse_coordinates)
            .collect();

        polygons.push(Polygon::with_inners(outer, inners));
    }

    polygons
}

/// Resolve the display name for a parsed file.
///
/// Preference order: first placemark name, then document name, then the
/// caller's fallback (the file stem). Blank names are treated as absent.
pub fn best_name(doc: &Document, fallback: &str) -> String {
    first_name_under(doc, "Placemark")
        .or_else(|| first_name_under(doc, "Document"))
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn first_name_under<'a>(doc: &'a Document<'_>, tag: &str) -> Option<&'a str> {
    doc.descendants()
        .filter(|n| is_named(n, tag))
        .find_map(|n| n.children().find(|c| is_named(c, "name")))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Document<'_> {
        Document::parse(xml).unwrap()
    }

    #[test]
    fn test_parse_coordinates_basic() {
        let pts = parse_coordinates("1,2 3,4");
        assert_eq!(pts, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_parse_coordinates_altitude_ignored() {
        let pts = parse_coordinates("-46.63,-23.55,760.0");
        assert_eq!(pts, vec![(-46.63, -23.55)]);
    }

    #[test]
    fn test_parse_coordinates_whitespace_variants() {
        let pts = parse_coordinates("1,2\n\t 3,4\n5,6");
        assert_eq!(pts, vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    }

    #[test]
    fn test_parse_coordinates_bad_tokens_skipped() {
        // A short token, a non-numeric token, and a trailing comma token
        // must not take their siblings down with them.
        let pts = parse_coordinates("1,2 3 x,y 4,z 5,6 7,");
        assert_eq!(pts, vec![(1.0, 2.0), (5.0, 6.0)]);
    }

    #[test]
    fn test_parse_coordinates_empty() {
        assert!(parse_coordinates("").is_empty());
        assert!(parse_coordinates("   \n\t ").is_empty());
    }

    #[test]
    fn test_collect_single_polygon() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Placemark>
                <Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>1,2 3,4 1,2</coordinates>
                </LinearRing></outerBoundaryIs></Polygon>
            </Placemark></Document></kml>"#,
        );

        let polygons = collect_polygons(&doc);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer, vec![(1.0, 2.0), (3.0, 4.0), (1.0, 2.0)]);
        assert!(polygons[0].inners.is_empty());
    }

    #[test]
    fn test_collect_with_namespace_prefix() {
        let doc = parse(
            r#"<k:kml xmlns:k="http://www.opengis.net/kml/2.2"><k:Document>
                <k:Polygon><k:outerBoundaryIs><k:LinearRing>
                    <k:coordinates>0,0 1,0 1,1</k:coordinates>
                </k:LinearRing></k:outerBoundaryIs></k:Polygon>
            </k:Document></k:kml>"#,
        );

        let polygons = collect_polygons(&doc);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer.len(), 3);
    }

    #[test]
    fn test_collect_inner_rings() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
                <Polygon>
                    <outerBoundaryIs><LinearRing>
                        <coordinates>0,0 4,0 4,4 0,4</coordinates>
                    </LinearRing></outerBoundaryIs>
                    <innerBoundaryIs><LinearRing>
                        <coordinates>1,1 2,1 2,2</coordinates>
                    </LinearRing></innerBoundaryIs>
                    <innerBoundaryIs><LinearRing>
                        <coordinates>3,3 3.5,3 3.5,3.5</coordinates>
                    </LinearRing></innerBoundaryIs>
                </Polygon>
            </kml>"#,
        );

        let polygons = collect_polygons(&doc);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].inners.len(), 2);
        assert_eq!(polygons[0].inners[0], vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]);
    }

    #[test]
    fn test_collect_loose_ring_fallback() {
        // No outerBoundaryIs at all - a bare LinearRing still counts as the
        // outer boundary.
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
                <Polygon><LinearRing>
                    <coordinates>1,1 2,2 3,3</coordinates>
                </LinearRing></Polygon>
            </kml>"#,
        );

        let polygons = collect_polygons(&doc);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer.len(), 3);
    }

    #[test]
    fn test_collect_blank_outer_falls_back() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
                <Polygon>
                    <outerBoundaryIs><LinearRing>
                        <coordinates>   </coordinates>
                    </LinearRing></outerBoundaryIs>
                </Polygon>
            </kml>"#,
        );

        // The fallback finds the same blank ring, which parses to zero
        // points, so the polygon is dropped.
        assert!(collect_polygons(&doc).is_empty());
    }

    #[test]
    fn test_collect_empty_outer_dropped() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
                <Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>garbage only,here</coordinates>
                </LinearRing></outerBoundaryIs></Polygon>
                <Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>5,6</coordinates>
                </LinearRing></outerBoundaryIs></Polygon>
            </kml>"#,
        );

        let polygons = collect_polygons(&doc);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer, vec![(5.0, 6.0)]);
    }

    #[test]
    fn test_collect_multiple_polygons_in_order() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
                <Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>1,1</coordinates>
                </LinearRing></outerBoundaryIs></Polygon>
                <Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>2,2</coordinates>
                </LinearRing></outerBoundaryIs></Polygon>
            </kml>"#,
        );

        let polygons = collect_polygons(&doc);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].outer, vec![(1.0, 1.0)]);
        assert_eq!(polygons[1].outer, vec![(2.0, 2.0)]);
    }

    #[test]
    fn test_best_name_prefers_placemark() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document>
                <name>Doc Name</name>
                <Placemark><name>Área A</name></Placemark>
            </Document></kml>"#,
        );
        assert_eq!(best_name(&doc, "file"), "Área A");
    }

    #[test]
    fn test_best_name_document_fallback() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document>
                <name>B 1</name>
                <Placemark></Placemark>
            </Document></kml>"#,
        );
        assert_eq!(best_name(&doc, "file"), "B 1");
    }

    #[test]
    fn test_best_name_blank_placemark_name_skipped() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document>
                <name>Doc Name</name>
                <Placemark><name>   </name></Placemark>
            </Document></kml>"#,
        );
        assert_eq!(best_name(&doc, "file"), "Doc Name");
    }

    #[test]
    fn test_best_name_file_stem_fallback() {
        let doc = parse(r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Placemark/></kml>"#);
        assert_eq!(best_name(&doc, "zona_norte"), "zona_norte");
    }

    #[test]
    fn test_best_name_trims() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
                <Placemark><name>  Centro  </name></Placemark>
            </kml>"#,
        );
        assert_eq!(best_name(&doc, "file"), "Centro");
    }
}
