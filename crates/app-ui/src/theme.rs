//! Design system and theme provider for SkillSwap
//!
//! This module provides the semantic color palette shared by every screen.
//! A single [`Theme`] value is built once at startup and passed by
//! reference into every view function; nothing here is globally mutable.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::Theme;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.palette.primary, "#6200EE");
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Brand Colors
// =============================================================================

/// SkillSwap brand colors
pub mod brand {
    /// Primary brand color (deep purple)
    pub const PRIMARY: &str = "#6200EE";

    /// Secondary accent (teal)
    pub const SECONDARY: &str = "#03DAC6";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Validation red
    pub const ERROR: &str = "#B00020";
}

// =============================================================================
// Palette
// =============================================================================

/// Semantic colors for specific UI purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Primary action and brand color
    pub primary: Color,
    /// Accent color (FAB, ratings, learner tags)
    pub secondary: Color,
    /// Screen background
    pub background: Color,
    /// Cards, inputs, and the tab bar
    pub card_background: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub light_text: Color,
    /// Placeholder text and hairline borders
    pub placeholder: Color,
    /// Text on filled buttons
    pub button_text: Color,
    /// Validation messages
    pub error: Color,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
///
/// Construct once and share by reference. The app ships a single light
/// scheme; the palette struct keeps room for alternates without touching
/// call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Color scheme name ("light")
    pub color_scheme: String,
    /// Semantic color palette
    pub palette: Palette,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.color_scheme == "dark"
    }
}

impl Default for Theme {
    fn default() -> Self {
        light_theme()
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        color_scheme: "light".to_string(),
        palette: Palette {
            primary: "#6200EE".to_string(),
            secondary: "#03DAC6".to_string(),
            background: "#F5F5F5".to_string(),
            card_background: "#FFFFFF".to_string(),
            text: "#212121".to_string(),
            light_text: "#616161".to_string(),
            placeholder: "#BDBDBD".to_string(),
            button_text: "#FFFFFF".to_string(),
            error: "#B00020".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#6200EE"), Some((98, 0, 238)));
        assert_eq!(parse_hex_color("#03DAC6"), Some((3, 218, 198)));
        assert_eq!(parse_hex_color("FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#FF"), None); // Too short
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(98, 0, 238), "#6200EE");
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_light_theme_basics() {
        let theme = light_theme();
        assert_eq!(theme.color_scheme, "light");
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_light_theme_palette() {
        let theme = light_theme();
        assert_eq!(theme.palette.primary, "#6200EE");
        assert_eq!(theme.palette.secondary, "#03DAC6");
        assert_eq!(theme.palette.background, "#F5F5F5");
        assert_eq!(theme.palette.card_background, "#FFFFFF");
        assert_eq!(theme.palette.text, "#212121");
        assert_eq!(theme.palette.light_text, "#616161");
        assert_eq!(theme.palette.placeholder, "#BDBDBD");
        assert_eq!(theme.palette.button_text, "#FFFFFF");
        assert_eq!(theme.palette.error, "#B00020");
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), light_theme());
    }

    #[test]
    fn test_brand_constants_match_palette() {
        let theme = light_theme();
        assert_eq!(theme.palette.primary, brand::PRIMARY);
        assert_eq!(theme.palette.secondary, brand::SECONDARY);
        assert_eq!(theme.palette.button_text, brand::WHITE);
        assert_eq!(theme.palette.error, brand::ERROR);
    }

    // ==========================================================================
    // Color Consistency Tests
    // ==========================================================================

    #[test]
    fn test_all_colors_are_valid_hex() {
        let theme = light_theme();
        let palette = &theme.palette;

        for (name, color) in [
            ("primary", &palette.primary),
            ("secondary", &palette.secondary),
            ("background", &palette.background),
            ("card_background", &palette.card_background),
            ("text", &palette.text),
            ("light_text", &palette.light_text),
            ("placeholder", &palette.placeholder),
            ("button_text", &palette.button_text),
            ("error", &palette.error),
        ] {
            assert!(
                parse_hex_color(color).is_some(),
                "Invalid {} color: {}",
                name,
                color
            );
        }
    }

    #[test]
    fn test_text_background_contrast() {
        // Basic check that text is readable against the screen background
        let theme = light_theme();
        let bg = parse_hex_color(&theme.palette.background).unwrap();
        let text = parse_hex_color(&theme.palette.text).unwrap();

        let bg_lum = (bg.0 as u32 + bg.1 as u32 + bg.2 as u32) / 3;
        let text_lum = (text.0 as u32 + text.1 as u32 + text.2 as u32) / 3;

        let diff = if bg_lum > text_lum {
            bg_lum - text_lum
        } else {
            text_lum - bg_lum
        };

        assert!(
            diff > 100,
            "insufficient text contrast: bg_lum={}, text_lum={}, diff={}",
            bg_lum,
            text_lum,
            diff
        );
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_theme_serialization() {
        let theme = light_theme();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"cardBackground\""));

        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
