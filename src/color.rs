use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{ModelCategory, Severity};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed mappings: category / severity → Color32
// ---------------------------------------------------------------------------

/// Colour for a model family, stable across charts and legends.
pub fn category_color(category: ModelCategory) -> Color32 {
    let palette = generate_palette(ModelCategory::ALL.len());
    let idx = ModelCategory::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or(0);
    palette[idx]
}

/// Severity colours follow the usual traffic-light reading rather than the
/// generated hue wheel.
pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Low => Color32::from_rgb(0x4c, 0xaf, 0x50),
        Severity::Moderate => Color32::from_rgb(0xff, 0xb3, 0x00),
        Severity::High => Color32::from_rgb(0xe5, 0x39, 0x35),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_entries() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn categories_map_to_distinct_colors() {
        let colors: Vec<Color32> = ModelCategory::ALL.iter().map(|&c| category_color(c)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
