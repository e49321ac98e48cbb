//! Design tokens for SkillSwap
//!
//! This module provides design tokens for spacing, sizing, radii,
//! elevation, and other design system primitives. Values match the
//! shipped style sheet exactly; components resolve against these rather
//! than hard-coding numbers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// Horizontal screen padding (16px)
    pub const SCREEN_X: f32 = 16.0;
    /// Padding on the auth screens (20px)
    pub const AUTH: f32 = 20.0;
    /// Vertical padding for scrollable content (16px)
    pub const SCROLL_Y: f32 = 16.0;
    /// Vertical margin between stacked inputs and cards (8px)
    pub const FIELD_Y: f32 = 8.0;
    /// Vertical margin around buttons and page titles (15px)
    pub const BLOCK_Y: f32 = 15.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "screen_x" => Some(SCREEN_X),
            "auth" => Some(AUTH),
            "scroll_y" => Some(SCROLL_Y),
            "field_y" => Some(FIELD_Y),
            "block_y" => Some(BLOCK_Y),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Tab bar and FAB icons (24px)
        pub const ACTION: f32 = 24.0;
        /// Profile avatar icon (80px)
        pub const AVATAR: f32 = 80.0;
    }

    /// Input field sizes
    pub mod input {
        /// Standard input height (50px)
        pub const HEIGHT: f32 = 50.0;
        /// Search bar height (45px)
        pub const SEARCH_HEIGHT: f32 = 45.0;
        /// Multiline text area height (120px)
        pub const TEXT_AREA_HEIGHT: f32 = 120.0;
        /// Horizontal input padding (15px)
        pub const PADDING_X: f32 = 15.0;
        /// Horizontal search bar padding (20px)
        pub const SEARCH_PADDING_X: f32 = 20.0;
    }

    /// Button sizes
    pub mod button {
        /// Filled button padding (15px)
        pub const PADDING: f32 = 15.0;
    }

    /// Floating action button
    pub mod fab {
        /// FAB diameter (56px)
        pub const SIZE: f32 = 56.0;
        /// Distance from the right edge (30px)
        pub const OFFSET_RIGHT: f32 = 30.0;
        /// Distance from the bottom edge, clearing the tab bar (75px)
        pub const OFFSET_BOTTOM: f32 = 75.0;
    }

    /// Bottom tab bar
    pub mod tab_bar {
        /// Bar height (60px)
        pub const HEIGHT: f32 = 60.0;
        /// Vertical padding above and below items (5px)
        pub const PADDING_Y: f32 = 5.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Category tag pill (10px)
    pub const TAG: f32 = 10.0;
    /// Cards (12px)
    pub const CARD: f32 = 12.0;
    /// Profile skill tag pill (15px)
    pub const SKILL_TAG: f32 = 15.0;
    /// Card action button (20px)
    pub const ACTION: f32 = 20.0;
    /// Inputs, search bar, and filled buttons (25px)
    pub const INPUT: f32 = 25.0;
    /// FAB, half its diameter (28px)
    pub const FAB: f32 = 28.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// No border (0px)
    pub const NONE: f32 = 0.0;
    /// Thin border for inputs, tags, and dividers (1px)
    pub const THIN: f32 = 1.0;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Elevation levels (Android-style shadow depth)
pub mod elevation {
    /// Flat (0)
    pub const NONE: u8 = 0;
    /// Cards (2)
    pub const CARD: u8 = 2;
    /// Filled buttons (3)
    pub const BUTTON: u8 = 3;
    /// FAB (6)
    pub const FAB: u8 = 6;
}

/// Shadow definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, opacity: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Card shadow
    pub fn card() -> Shadow {
        Shadow::new(0.0, 2.0, 4.0, 0.1)
    }
}

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Opacity values for translucent elements
pub mod opacity {
    /// Category tag on feed cards (0.7)
    pub const CATEGORY_TAG: f32 = 0.7;
    /// Learner skill tag on the profile (0.8)
    pub const LEARNER_TAG: f32 = 0.8;
    /// Fully opaque
    pub const FULL: f32 = 1.0;
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Default layer
    pub const DEFAULT: i32 = 0;
    /// FAB floating over the feed
    pub const FAB: i32 = 10;
}

// =============================================================================
// Content Widths
// =============================================================================

/// Content width constraints
pub mod content_width {
    /// Auth form max width (350px)
    pub const AUTH_FORM: f32 = 350.0;
    /// Full width (no constraint)
    pub const FULL: f32 = f32::MAX;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Spacing Tests
    // ==========================================================================

    #[test]
    fn test_spacing_values() {
        assert_eq!(spacing::SCREEN_X, 16.0);
        assert_eq!(spacing::AUTH, 20.0);
        assert_eq!(spacing::SCROLL_Y, 16.0);
        assert_eq!(spacing::FIELD_Y, 8.0);
        assert_eq!(spacing::BLOCK_Y, 15.0);
    }

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("screen_x"), Some(16.0));
        assert_eq!(spacing::get("block_y"), Some(15.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    // ==========================================================================
    // Sizing Tests
    // ==========================================================================

    #[test]
    fn test_input_sizes() {
        assert_eq!(sizing::input::HEIGHT, 50.0);
        assert_eq!(sizing::input::SEARCH_HEIGHT, 45.0);
        assert_eq!(sizing::input::TEXT_AREA_HEIGHT, 120.0);
        assert!(sizing::input::SEARCH_HEIGHT < sizing::input::HEIGHT);
        assert!(sizing::input::HEIGHT < sizing::input::TEXT_AREA_HEIGHT);
    }

    #[test]
    fn test_fab_sizes() {
        assert_eq!(sizing::fab::SIZE, 56.0);
        // FAB clears the tab bar
        assert!(sizing::fab::OFFSET_BOTTOM > sizing::tab_bar::HEIGHT);
    }

    #[test]
    fn test_tab_bar_sizes() {
        assert_eq!(sizing::tab_bar::HEIGHT, 60.0);
        assert_eq!(sizing::tab_bar::PADDING_Y, 5.0);
    }

    #[test]
    fn test_icon_sizes() {
        assert!(sizing::icon::ACTION < sizing::icon::AVATAR);
    }

    // ==========================================================================
    // Border Radius Tests
    // ==========================================================================

    #[test]
    fn test_radius_scale() {
        assert_eq!(radius::NONE, 0.0);
        assert!(radius::TAG < radius::CARD);
        assert!(radius::CARD < radius::SKILL_TAG);
        assert!(radius::SKILL_TAG < radius::ACTION);
        assert!(radius::ACTION < radius::INPUT);
        assert!(radius::INPUT < radius::FAB);
    }

    #[test]
    fn test_fab_radius_is_half_size() {
        assert_eq!(radius::FAB * 2.0, sizing::fab::SIZE);
    }

    // ==========================================================================
    // Elevation Tests
    // ==========================================================================

    #[test]
    fn test_elevation_ordering() {
        assert!(elevation::NONE < elevation::CARD);
        assert!(elevation::CARD < elevation::BUTTON);
        assert!(elevation::BUTTON < elevation::FAB);
    }

    #[test]
    fn test_shadow_presets() {
        let none = shadows::none();
        assert_eq!(none.blur, 0.0);

        let card = shadows::card();
        assert_eq!(card.offset_y, 2.0);
        assert_eq!(card.blur, 4.0);
        assert_eq!(card.opacity, 0.1);
    }

    // ==========================================================================
    // Opacity Tests
    // ==========================================================================

    #[test]
    fn test_opacity_values() {
        assert_eq!(opacity::CATEGORY_TAG, 0.7);
        assert_eq!(opacity::LEARNER_TAG, 0.8);
        assert!(opacity::CATEGORY_TAG < opacity::LEARNER_TAG);
        assert!(opacity::LEARNER_TAG < opacity::FULL);
    }

    // ==========================================================================
    // Z-Index Tests
    // ==========================================================================

    #[test]
    fn test_z_index_ordering() {
        assert!(z_index::DEFAULT < z_index::FAB);
    }

    // ==========================================================================
    // Typography Token Tests
    // ==========================================================================

    #[test]
    fn test_font_weights() {
        assert_eq!(font_weight::NORMAL, 400);
        assert!(font_weight::SEMI_BOLD > font_weight::NORMAL);
        assert!(font_weight::BOLD > font_weight::SEMI_BOLD);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_shadow_serialization() {
        let shadow = shadows::card();
        let json = serde_json::to_string(&shadow).unwrap();
        let deserialized: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shadow);
    }
}
