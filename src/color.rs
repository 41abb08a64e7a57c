use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

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

/// Fixed pie colour per outcome, independent of which slices are present.
pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => Color32::from_rgb(0xEF, 0x55, 0x3B),
        Outcome::Success => Color32::from_rgb(0x63, 0x6E, 0xFA),
    }
}

/// Pie slice colour by label; anything unknown falls back to gray.
pub fn outcome_label_color(label: &str) -> Color32 {
    [Outcome::Failure, Outcome::Success]
        .into_iter()
        .find(|o| o.label() == label)
        .map(outcome_color)
        .unwrap_or(Color32::GRAY)
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Color32
// ---------------------------------------------------------------------------

/// Maps every booster category of the dataset (visible or not) to a
/// distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (category → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(c, color)| (c.clone(), *color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        let unique: BTreeSet<_> = colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn color_map_lookup() {
        let categories: BTreeSet<String> = ["B4", "FT", "v1.0"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new(&categories);
        assert_eq!(map.legend_entries().len(), 3);
        assert_ne!(map.color_for("B4"), map.color_for("FT"));
        assert_eq!(map.color_for("unknown"), Color32::GRAY);
    }

    #[test]
    fn outcome_colors_by_label() {
        assert_eq!(outcome_label_color("Success"), outcome_color(Outcome::Success));
        assert_eq!(outcome_label_color("Failure"), outcome_color(Outcome::Failure));
        assert_eq!(outcome_label_color("Scrubbed"), Color32::GRAY);
    }
}
