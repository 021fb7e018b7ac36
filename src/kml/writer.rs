use crate::domain::{FeatureRecord, PolyStyle, Polygon};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const STYLE_ID: &str = "district";

/// Write one normalized KML document for a parsed input file.
///
/// The layout matches the generated web overlays: a Document carrying a
/// single shared Style, then either one Placemark (single-polygon source)
/// or a Folder of numbered Placemarks (multi-polygon source). Ring points
/// are written back verbatim as `lon,lat` tokens.
pub fn write_kml(path: &Path, record: &FeatureRecord, style: &PolyStyle) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(w, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
    writeln!(w, "  <Document>")?;
    write_style(&mut w, style)?;

    if let [polygon] = record.polygons.as_slice() {
        write_placemark(&mut w, &record.display_name, polygon, 2)?;
    } else {
        writeln!(w, "    <Folder>")?;
        writeln!(w, "      <name>{}</name>", escape_text(&record.display_name))?;
        for (i, polygon) in record.polygons.iter().enumerate() {
            let name = format!("{} #{}", record.display_name, i + 1);
            write_placemark(&mut w, &name, polygon, 3)?;
        }
        writeln!(w, "    </Folder>")?;
    }

    writeln!(w, "  </Document>")?;
    writeln!(w, "</kml>")?;
    w.flush()?;

    Ok(())
}

fn write_style(w: &mut impl Write, style: &PolyStyle) -> io::Result<()> {
    writeln!(w, r#"    <Style id="{}">"#, STYLE_ID)?;
    writeln!(w, "      <PolyStyle>")?;
    writeln!(w, "        <color>{}</color>", style.kml_color())?;
    writeln!(w, "        <fill>{}</fill>", u8::from(style.fill))?;
    writeln!(w, "        <outline>{}</outline>", u8::from(style.outline))?;
    writeln!(w, "      </PolyStyle>")?;
    writeln!(w, "    </Style>")?;
    Ok(())
}

fn write_placemark(w: &mut impl Write, name: &str, polygon: &Polygon, depth: usize) -> io::Result<()> {
    let pad = "  ".repeat(depth);

    writeln!(w, "{pad}<Placemark>")?;
    writeln!(w, "{pad}  <name>{}</name>", escape_text(name))?;
    writeln!(w, "{pad}  <styleUrl>#{}</styleUrl>", STYLE_ID)?;
    writeln!(w, "{pad}  <Polygon>")?;

    writeln!(w, "{pad}    <outerBoundaryIs>")?;
    write_ring(w, &polygon.outer, depth + 3)?;
    writeln!(w, "{pad}    </outerBoundaryIs>")?;

    for inner in &polygon.inners {
        writeln!(w, "{pad}    <innerBoundaryIs>")?;
        write_ring(w, inner, depth + 3)?;
        writeln!(w, "{pad}    </innerBoundaryIs>")?;
    }

    writeln!(w, "{pad}  </Polygon>")?;
    writeln!(w, "{pad}</Placemark>")?;
    Ok(())
}

fn write_ring(w: &mut impl Write, ring: &[(f64, f64)], depth: usize) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    let coords = ring
        .iter()
        .map(|(lon, lat)| format!("{},{}", lon, lat))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(w, "{pad}<LinearRing>")?;
    writeln!(w, "{pad}  <coordinates>{}</coordinates>", coords)?;
    writeln!(w, "{pad}</LinearRing>")?;
    Ok(())
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
