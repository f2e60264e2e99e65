pub mod ranges;

use serde::{Deserialize, Serialize};

/// Surface finish applied to the panel material in the preview.
///
/// The three finishes QAQ offers for perforated screens. The hex string is
/// what lands in the exported parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finish {
    Magenta,
    LightGrey,
    Bronze,
}

impl Finish {
    pub fn all() -> [Finish; 3] {
        [Finish::Magenta, Finish::LightGrey, Finish::Bronze]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Finish::Magenta => "Magenta",
            Finish::LightGrey => "Light Grey",
            Finish::Bronze => "Bronze",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Finish::Magenta => "#80428f",
            Finish::LightGrey => "#D3D3D3",
            Finish::Bronze => "#CD7F32",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Finish::Magenta => [0x80, 0x42, 0x8f],
            Finish::LightGrey => [0xD3, 0xD3, 0xD3],
            Finish::Bronze => [0xCD, 0x7F, 0x32],
        }
    }

    pub fn color32(&self) -> egui::Color32 {
        let [r, g, b] = self.rgb();
        egui::Color32::from_rgb(r, g, b)
    }
}

/// How the center-to-center hole spacing is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacingPolicy {
    /// Spacing is the explicit `pattern_spacing` parameter.
    Fixed,
    /// Spacing is derived from the hole diameter (reference unit = 2x diameter)
    /// so the grid always fills the available area.
    Derived,
}

impl SpacingPolicy {
    pub fn display_name(&self) -> &'static str {
        match self {
            SpacingPolicy::Fixed => "Fixed",
            SpacingPolicy::Derived => "Derived",
        }
    }
}

/// The single configurator parameter record. All dimensions in millimeters.
///
/// `2 * border_margin < min(screen_width, screen_height)` is assumed but not
/// enforced; the shipped slider ranges keep it true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelParams {
    pub screen_width: f64,
    pub screen_height: f64,
    pub screen_thickness: f64,
    pub border_margin: f64,
    /// Center-to-center hole spacing, used by the Fixed policy only.
    pub pattern_spacing: f64,
    pub hole_diameter: f64,
    pub spacing_policy: SpacingPolicy,
    pub finish: Finish,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 1800.0,
            screen_thickness: 8.0,
            border_margin: 30.0,
            pattern_spacing: 100.0,
            hole_diameter: 20.0,
            spacing_policy: SpacingPolicy::Derived,
            finish: Finish::Magenta,
        }
    }
}

impl PanelParams {
    /// Pattern area per axis after the border margin is taken off both sides.
    pub fn available_width(&self) -> f64 {
        self.screen_width - 2.0 * self.border_margin
    }

    pub fn available_height(&self) -> f64 {
        self.screen_height - 2.0 * self.border_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_slider_ranges() {
        let p = PanelParams::default();
        assert!(ranges::SCREEN_WIDTH.contains(&p.screen_width));
        assert!(ranges::SCREEN_HEIGHT.contains(&p.screen_height));
        assert!(ranges::SCREEN_THICKNESS.contains(&p.screen_thickness));
        assert!(ranges::BORDER_MARGIN.contains(&p.border_margin));
        assert!(ranges::PATTERN_SPACING.contains(&p.pattern_spacing));
        assert!(ranges::HOLE_DIAMETER.contains(&p.hole_diameter));
    }

    #[test]
    fn test_available_area() {
        let p = PanelParams::default();
        assert_eq!(p.available_width(), 1140.0);
        assert_eq!(p.available_height(), 1740.0);
    }

    #[test]
    fn test_finish_hex_matches_rgb() {
        for finish in Finish::all() {
            let [r, g, b] = finish.rgb();
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            assert_eq!(hex.to_lowercase(), finish.hex().to_lowercase());
        }
    }

    #[test]
    fn test_params_roundtrip_json() {
        let p = PanelParams {
            spacing_policy: SpacingPolicy::Fixed,
            finish: Finish::Bronze,
            ..PanelParams::default()
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: PanelParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
