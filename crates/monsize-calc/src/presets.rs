//! Common monitor configurations offered when building a size comparison.

use crate::{AspectRatio, Diagonal, DisplayColor, MonitorConfiguration, Resolution};

/// A named preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorPreset {
    /// Display name.
    pub name: &'static str,
    /// Nominal diagonal.
    pub diagonal: Diagonal,
    /// Panel resolution.
    pub resolution: Resolution,
    /// Aspect ratio.
    pub aspect_ratio: AspectRatio,
}

/// Built-in presets, in menu order.
pub const PRESETS: [MonitorPreset; 10] = [
    preset("Full HD 24\"", 24.0, (1920, 1080), (16.0, 9.0)),
    preset("Full HD 27\"", 27.0, (1920, 1080), (16.0, 9.0)),
    preset("QHD 27\"", 27.0, (2560, 1440), (16.0, 9.0)),
    preset("4K 27\"", 27.0, (3840, 2160), (16.0, 9.0)),
    preset("4K 32\"", 32.0, (3840, 2160), (16.0, 9.0)),
    preset("Ultrawide 34\"", 34.0, (3440, 1440), (21.0, 9.0)),
    preset("Super Ultrawide 49\"", 49.0, (5120, 1440), (32.0, 9.0)),
    preset("OLED 42\"", 42.0, (3840, 2160), (16.0, 9.0)),
    preset("OLED 48\"", 48.0, (3840, 2160), (16.0, 9.0)),
    preset("OLED 55\"", 55.0, (3840, 2160), (16.0, 9.0)),
];

const fn preset(
    name: &'static str,
    diagonal: f64,
    (width, height): (u32, u32),
    (ratio_w, ratio_h): (f64, f64),
) -> MonitorPreset {
    MonitorPreset {
        name,
        diagonal: Diagonal::from_trusted(diagonal),
        resolution: Resolution { width, height },
        aspect_ratio: AspectRatio::from_trusted(ratio_w, ratio_h),
    }
}

impl MonitorPreset {
    /// Build a configuration from this preset.
    #[must_use]
    pub fn to_configuration(&self, color: DisplayColor) -> MonitorConfiguration {
        MonitorConfiguration::from_parts(
            self.name,
            self.diagonal,
            self.resolution,
            self.aspect_ratio,
            color,
        )
    }
}

/// Find a preset by name, ignoring ASCII case and a trailing inch mark.
///
/// `"4k 27"` and `"4K 27\""` both match the `4K 27"` preset.
#[must_use]
pub fn find_preset(name: &str) -> Option<&'static MonitorPreset> {
    let wanted = name.trim().trim_end_matches('"');
    PRESETS
        .iter()
        .find(|p| p.name.trim_end_matches('"').eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PALETTE;

    #[test]
    fn test_all_presets_are_valid() {
        for preset in &PRESETS {
            let diagonal = preset.diagonal.inches();
            assert_eq!(Diagonal::new(diagonal), Ok(preset.diagonal), "{}", preset.name);
            assert_eq!(
                Resolution::parse(&preset.resolution.to_string()),
                Ok(preset.resolution),
                "{}",
                preset.name
            );
            assert_eq!(
                AspectRatio::parse(&preset.aspect_ratio.to_string()),
                Ok(preset.aspect_ratio),
                "{}",
                preset.name
            );
        }
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("4K 27\"").unwrap().resolution.to_string(), "3840x2160");
        assert_eq!(find_preset("4k 27").unwrap().name, "4K 27\"");
        assert_eq!(
            find_preset("  ultrawide 34 ").unwrap().aspect_ratio.to_string(),
            "21:9"
        );
        assert!(find_preset("8K 65").is_none());
    }

    #[test]
    fn test_preset_to_configuration() {
        let config = find_preset("OLED 42").unwrap().to_configuration(PALETTE[4]);
        assert_eq!(config.name(), "OLED 42\"");
        assert_eq!(config.pixel_density(), 105);
        assert_eq!(config.color().name, "Purple");
    }
}
