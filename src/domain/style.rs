/// Shared polygon style applied to every emitted feature.
///
/// Matches the web map's district overlay: red fill at partial opacity with
/// both fill and outline enabled. Constructed once in main and passed by
/// reference into the writer.
#[derive(Debug, Clone)]
pub struct PolyStyle {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub fill: bool,
    pub outline: bool,
}

impl PolyStyle {
    /// The district overlay style: red at alpha 120.
    pub fn district() -> Self {
        Self {
            alpha: 120,
            red: 255,
            green: 0,
            blue: 0,
            fill: true,
            outline: true,
        }
    }

    /// KML color string in aabbggrr hex order.
    pub fn kml_color(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            self.alpha, self.blue, self.green, self.red
        )
    }
}
