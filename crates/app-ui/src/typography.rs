//! Typography system for SkillSwap
//!
//! Text styles used across the screens. Each variant maps to the size
//! and weight the style sheet ships; there is no font scaling or family
//! configuration.

pub use crate::tokens::font_weight;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Tags and tab labels (12px)
    pub const XS: f32 = 12.0;
    /// Body, subtitle, and link text (14px)
    pub const SM: f32 = 14.0;
    /// Inputs, buttons, and ratings (16px)
    pub const MD: f32 = 16.0;
    /// Card titles, taglines, and section headers (18px)
    pub const LG: f32 = 18.0;
    /// Page titles and the profile name (24px)
    pub const XL: f32 = 24.0;
    /// Brand title on the auth screens (32px)
    pub const XXL: f32 = 32.0;
}

// =============================================================================
// Typography Style
// =============================================================================

/// A typography style definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 600, 700)
    pub font_weight: u16,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
        }
    }

    /// Whether this style renders at bold weight
    pub fn is_bold(&self) -> bool {
        self.font_weight >= font_weight::BOLD
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// "SkillSwap" brand title on the auth screens
    BrandTitle,
    /// Tagline under the brand title
    Tagline,
    /// Page titles and the profile name
    PageTitle,
    /// Section headers on the profile screen
    SectionHeader,
    /// Offer card titles
    CardTitle,
    /// Rating text beside card titles
    Rating,
    /// Body and subtitle text
    #[default]
    Body,
    /// Input field text
    Input,
    /// Filled button labels
    Button,
    /// Inline navigation links
    Link,
    /// Category tag on feed cards
    Tag,
    /// Skill tag pills on the profile
    SkillTag,
    /// Bottom tab labels
    TabLabel,
}

impl TypographyVariant {
    /// Get the text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::BrandTitle => TextStyle::new(font_size::XXL, font_weight::BOLD),
            Self::Tagline => TextStyle::new(font_size::LG, font_weight::NORMAL),
            Self::PageTitle => TextStyle::new(font_size::XL, font_weight::BOLD),
            Self::SectionHeader => TextStyle::new(font_size::LG, font_weight::BOLD),
            Self::CardTitle => TextStyle::new(font_size::LG, font_weight::BOLD),
            Self::Rating => TextStyle::new(font_size::MD, font_weight::BOLD),
            Self::Body => TextStyle::new(font_size::SM, font_weight::NORMAL),
            Self::Input => TextStyle::new(font_size::MD, font_weight::NORMAL),
            Self::Button => TextStyle::new(font_size::MD, font_weight::BOLD),
            Self::Link => TextStyle::new(font_size::SM, font_weight::SEMI_BOLD),
            Self::Tag => TextStyle::new(font_size::XS, font_weight::SEMI_BOLD),
            Self::SkillTag => TextStyle::new(font_size::SM, font_weight::SEMI_BOLD),
            Self::TabLabel => TextStyle::new(font_size::XS, font_weight::NORMAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Font Size Tests
    // ==========================================================================

    #[test]
    fn test_font_size_scale() {
        assert!(font_size::XS < font_size::SM);
        assert!(font_size::SM < font_size::MD);
        assert!(font_size::MD < font_size::LG);
        assert!(font_size::LG < font_size::XL);
        assert!(font_size::XL < font_size::XXL);
    }

    // ==========================================================================
    // TextStyle Tests
    // ==========================================================================

    #[test]
    fn test_text_style_new() {
        let style = TextStyle::new(16.0, 400);
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.font_weight, 400);
        assert!(!style.is_bold());
    }

    #[test]
    fn test_is_bold() {
        assert!(TextStyle::new(24.0, 700).is_bold());
        assert!(!TextStyle::new(14.0, 600).is_bold());
    }

    // ==========================================================================
    // Typography Variant Tests
    // ==========================================================================

    #[test]
    fn test_brand_title_style() {
        let style = TypographyVariant::BrandTitle.style();
        assert_eq!(style.font_size, 32.0);
        assert_eq!(style.font_weight, 700);
    }

    #[test]
    fn test_page_title_style() {
        let style = TypographyVariant::PageTitle.style();
        assert_eq!(style.font_size, 24.0);
        assert!(style.is_bold());
    }

    #[test]
    fn test_card_text_styles() {
        let title = TypographyVariant::CardTitle.style();
        assert_eq!(title.font_size, 18.0);
        assert_eq!(title.font_weight, 700);

        let rating = TypographyVariant::Rating.style();
        assert_eq!(rating.font_size, 16.0);
        assert!(rating.is_bold());

        let body = TypographyVariant::Body.style();
        assert_eq!(body.font_size, 14.0);
        assert_eq!(body.font_weight, 400);
    }

    #[test]
    fn test_tag_styles() {
        let tag = TypographyVariant::Tag.style();
        assert_eq!(tag.font_size, 12.0);
        assert_eq!(tag.font_weight, 600);

        // Profile skill tags share the weight at body size
        let skill = TypographyVariant::SkillTag.style();
        assert_eq!(skill.font_size, 14.0);
        assert_eq!(skill.font_weight, 600);
    }

    #[test]
    fn test_button_and_link_styles() {
        let button = TypographyVariant::Button.style();
        assert_eq!(button.font_size, 16.0);
        assert_eq!(button.font_weight, 700);

        let link = TypographyVariant::Link.style();
        assert_eq!(link.font_weight, 600);
    }

    #[test]
    fn test_tab_label_style() {
        let style = TypographyVariant::TabLabel.style();
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.font_weight, 400);
    }

    #[test]
    fn test_default_variant_is_body() {
        assert_eq!(TypographyVariant::default(), TypographyVariant::Body);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_typography_variant_serialization() {
        let variant = TypographyVariant::BrandTitle;
        let json = serde_json::to_string(&variant).unwrap();
        assert_eq!(json, "\"brand-title\"");

        let deserialized: TypographyVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TypographyVariant::BrandTitle);
    }

    #[test]
    fn test_text_style_serialization() {
        let style = TypographyVariant::Button.style();
        let json = serde_json::to_string(&style).unwrap();
        let deserialized: TextStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, style);
    }
}
