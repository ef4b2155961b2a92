use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colors
// ---------------------------------------------------------------------------

/// Hue of the first series; the rest are spaced evenly around the wheel.
const BASE_HUE: f32 = 210.0;

/// `n` visually distinct colors for chart series, one per series index.
pub fn series_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + (i as f32 / n.max(1) as f32) * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.7, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_one_color_per_series() {
        assert!(series_palette(0).is_empty());
        assert_eq!(series_palette(1).len(), 1);
        assert_eq!(series_palette(5).len(), 5);
    }

    #[test]
    fn adjacent_series_get_distinct_colors() {
        let colors = series_palette(4);
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
