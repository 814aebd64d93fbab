use std::fmt;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Alpha used for the fill colour of a series.
pub const FILL_ALPHA: f32 = 0.2;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<[u8; 3]> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            [
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            ]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rgba / SeriesStyle
// ---------------------------------------------------------------------------

/// An sRGB colour with straight (unmultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new([r, g, b]: [u8; 3], a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> Color32 {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Fill and stroke colours of one plotted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub fill: Rgba,
    pub line: Rgba,
}

impl SeriesStyle {
    /// Opaque stroke with a translucent fill of the same colour.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self {
            fill: Rgba::new(rgb, FILL_ALPHA),
            line: Rgba::new(rgb, 1.0),
        }
    }
}

/// Styles for `n` series: configured colours where given, generated ones
/// for the rest.
pub fn series_styles(configured: &[Option<[u8; 3]>]) -> Vec<SeriesStyle> {
    let generated = generate_palette(configured.len());
    configured
        .iter()
        .zip(generated)
        .map(|(wanted, fallback)| SeriesStyle::from_rgb(wanted.unwrap_or(fallback)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        let colours = generate_palette(4);
        assert_eq!(colours.len(), 4);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn style_uses_translucent_fill() {
        let style = SeriesStyle::from_rgb([75, 192, 192]);
        assert_eq!(style.fill.to_string(), "rgba(75, 192, 192, 0.2)");
        assert_eq!(style.line.to_string(), "rgba(75, 192, 192, 1)");
        assert_eq!(style.line.to_color32(), Color32::from_rgb(75, 192, 192));
    }

    #[test]
    fn configured_colours_win_over_generated_ones() {
        let styles = series_styles(&[Some([1, 2, 3]), None]);
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0], SeriesStyle::from_rgb([1, 2, 3]));
        assert_eq!(styles[1], SeriesStyle::from_rgb(generate_palette(2)[1]));
    }
}
