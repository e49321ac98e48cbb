//! UI component library for SkillSwap
//!
//! This module provides the foundational UI components the screens are
//! assembled from, adapted for Rust rendering hosts.
//!
//! # Component Design
//!
//! Components are defined as Rust structs with serializable properties
//! that can be rendered by the frontend. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Theme-aware styling through the theme system
//! - Computed style structs resolved against a [`Theme`]
//!
//! # Available Components
//!
//! - [`Button`] - Interactive button with multiple variants
//! - [`Text`] - Typography component with semantic variants
//! - [`Input`] - Text input covering single-line, search, and multiline kinds
//! - [`Icon`] - Named glyph component
//! - [`Card`] - Elevated surface for list entries
//! - [`Tag`] - Compact label chip for categories and skills
//! - [`TabBar`] - Bottom tab bar over the four main sections
//! - [`Fab`] - Floating action button
//! - [`HeaderBar`] - Stack header shown above pushed screens

use crate::navigation::MainTab;
use crate::theme::{Color, Theme};
use crate::tokens::{border, elevation, opacity, radius, shadows, sizing, z_index, Shadow};
use crate::typography::{font_size, font_weight, TypographyVariant};
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Start-aligned (the default)
    #[default]
    Left,
    /// Centered
    Center,
    /// End-aligned
    Right,
}

/// Check if alignment is the default (used for serde skip)
fn is_start_aligned(align: &TextAlign) -> bool {
    *align == TextAlign::Left
}

// =============================================================================
// Button Component
// =============================================================================

/// Button visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid fill in the accent color
    #[default]
    Filled,
    /// Transparent fill with an accent-colored border
    Outlined,
    /// Label only, no fill or border
    Plain,
}

/// Accent color a button draws from the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAccent {
    /// Brand purple
    #[default]
    Primary,
    /// Brand teal
    Secondary,
    /// Body text color, for low-emphasis actions
    Neutral,
}

impl ButtonAccent {
    fn color(&self, theme: &Theme) -> Color {
        match self {
            Self::Primary => theme.palette.primary.clone(),
            Self::Secondary => theme.palette.secondary.clone(),
            Self::Neutral => theme.palette.text.clone(),
        }
    }
}

/// Button outline shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    /// Full-round form button (auth and composer submits)
    #[default]
    Pill,
    /// Rounded inline button (card and profile actions)
    Rounded,
}

/// Button component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button label text
    pub label: String,
    /// Visual variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Accent color
    #[serde(default)]
    pub accent: ButtonAccent,
    /// Outline shape
    #[serde(default)]
    pub shape: ButtonShape,
    /// Whether the button stretches to the width of its container
    #[serde(default)]
    pub full_width: bool,
}

impl Button {
    /// Create a form submit button (filled primary pill, full width)
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Filled,
            accent: ButtonAccent::Primary,
            shape: ButtonShape::Pill,
            full_width: true,
        }
    }

    /// Create a filled inline action button
    pub fn contained(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Filled,
            accent: ButtonAccent::Primary,
            shape: ButtonShape::Rounded,
            full_width: false,
        }
    }

    /// Create an outlined inline action button
    pub fn outlined(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Outlined,
            accent: ButtonAccent::Primary,
            shape: ButtonShape::Rounded,
            full_width: false,
        }
    }

    /// Create a label-only button
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Plain,
            accent: ButtonAccent::Neutral,
            shape: ButtonShape::Rounded,
            full_width: false,
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the accent color
    pub fn with_accent(mut self, accent: ButtonAccent) -> Self {
        self.accent = accent;
        self
    }

    /// Set the shape
    pub fn with_shape(mut self, shape: ButtonShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set full width
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Get computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let accent = self.accent.color(theme);

        let background = match (self.variant, self.accent) {
            (ButtonVariant::Filled, _) => Some(accent.clone()),
            _ => None,
        };

        let label_color = match (self.variant, self.accent) {
            // Purple fill takes the light label; teal fill stays readable with dark text.
            (ButtonVariant::Filled, ButtonAccent::Primary) => theme.palette.button_text.clone(),
            (ButtonVariant::Filled, _) => theme.palette.text.clone(),
            _ => accent.clone(),
        };

        let (border_color, border_width) = match self.variant {
            ButtonVariant::Outlined => (Some(accent), border::THIN),
            _ => (None, border::NONE),
        };

        let (padding, border_radius) = match self.shape {
            ButtonShape::Pill => (sizing::button::PADDING, radius::INPUT),
            ButtonShape::Rounded => (8.0, radius::ACTION),
        };

        let elevation = match (self.variant, self.shape) {
            (ButtonVariant::Filled, ButtonShape::Pill) => elevation::BUTTON,
            (ButtonVariant::Filled, ButtonShape::Rounded) => elevation::CARD,
            _ => elevation::NONE,
        };

        let (label_size, label_weight) = match self.shape {
            ButtonShape::Pill => (font_size::MD, font_weight::BOLD),
            ButtonShape::Rounded => match self.variant {
                ButtonVariant::Filled => (font_size::SM, font_weight::BOLD),
                _ => (font_size::SM, font_weight::SEMI_BOLD),
            },
        };

        ButtonStyles {
            background,
            label_color,
            border_color,
            border_width,
            padding,
            border_radius,
            elevation,
            label_size,
            label_weight,
            full_width: self.full_width,
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyles {
    /// Fill color, None for transparent variants
    pub background: Option<Color>,
    /// Label color
    pub label_color: Color,
    /// Border color, None when borderless
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Inner padding
    pub padding: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Drop shadow elevation
    pub elevation: u8,
    /// Label font size
    pub label_size: f32,
    /// Label font weight
    pub label_weight: u16,
    /// Whether the button stretches to its container width
    pub full_width: bool,
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography variant
    pub variant: TypographyVariant,
    /// Color override; the variant default is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Horizontal alignment
    #[serde(default, skip_serializing_if = "is_start_aligned")]
    pub align: TextAlign,
}

impl Text {
    /// Create a new text component
    pub fn new(content: impl Into<String>, variant: TypographyVariant) -> Self {
        Self {
            content: content.into(),
            variant,
            color: None,
            align: TextAlign::Left,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Center the text
    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    /// Resolve the color, falling back to the variant default for the theme
    pub fn resolved_color(&self, theme: &Theme) -> Color {
        if let Some(color) = &self.color {
            return color.clone();
        }
        let palette = &theme.palette;
        match self.variant {
            TypographyVariant::BrandTitle => palette.primary.clone(),
            TypographyVariant::Tagline => palette.light_text.clone(),
            TypographyVariant::PageTitle => palette.text.clone(),
            TypographyVariant::SectionHeader => palette.text.clone(),
            TypographyVariant::CardTitle => palette.text.clone(),
            TypographyVariant::Rating => palette.secondary.clone(),
            TypographyVariant::Body => palette.light_text.clone(),
            TypographyVariant::Input => palette.text.clone(),
            TypographyVariant::Button => palette.button_text.clone(),
            TypographyVariant::Link => palette.primary.clone(),
            TypographyVariant::Tag => palette.primary.clone(),
            TypographyVariant::SkillTag => palette.button_text.clone(),
            TypographyVariant::TabLabel => palette.light_text.clone(),
        }
    }

    /// Get computed styles for this text based on theme
    pub fn computed_styles(&self, theme: &Theme) -> TextStyles {
        let style = self.variant.style();
        TextStyles {
            font_size: style.font_size,
            font_weight: style.font_weight,
            color: self.resolved_color(theme),
            align: self.align,
        }
    }
}

/// Computed text styles
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyles {
    /// Font size
    pub font_size: f32,
    /// Font weight
    pub font_weight: u16,
    /// Resolved color
    pub color: Color,
    /// Horizontal alignment
    pub align: TextAlign,
}

// =============================================================================
// Input Component
// =============================================================================

/// Input kind, selecting keyboard, masking, and field chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Plain single-line text
    #[default]
    Text,
    /// Email address entry
    Email,
    /// Masked password entry
    Password,
    /// Rounded search field
    Search,
    /// Multiline text area
    TextArea,
}

/// Input component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Input kind
    #[serde(default)]
    pub kind: InputKind,
    /// Placeholder text
    pub placeholder: String,
    /// Current value
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Input {
    /// Create a plain text input
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Text,
            placeholder: placeholder.into(),
            value: String::new(),
        }
    }

    /// Create an email input
    pub fn email(placeholder: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Email,
            ..Self::new(placeholder)
        }
    }

    /// Create a password input
    pub fn password(placeholder: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Password,
            ..Self::new(placeholder)
        }
    }

    /// Create a search input
    pub fn search(placeholder: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Search,
            ..Self::new(placeholder)
        }
    }

    /// Create a multiline text area
    pub fn text_area(placeholder: impl Into<String>) -> Self {
        Self {
            kind: InputKind::TextArea,
            ..Self::new(placeholder)
        }
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Whether the entered text is masked
    pub fn is_secure(&self) -> bool {
        self.kind == InputKind::Password
    }

    /// Whether the input accepts multiple lines
    pub fn is_multiline(&self) -> bool {
        self.kind == InputKind::TextArea
    }

    /// Get computed styles for this input based on theme
    pub fn computed_styles(&self, theme: &Theme) -> InputStyles {
        let height = match self.kind {
            InputKind::Search => sizing::input::SEARCH_HEIGHT,
            InputKind::TextArea => sizing::input::TEXT_AREA_HEIGHT,
            _ => sizing::input::HEIGHT,
        };

        let padding_horizontal = match self.kind {
            InputKind::Search => sizing::input::SEARCH_PADDING_X,
            _ => sizing::input::PADDING_X,
        };

        // Text areas pad vertically so the first line does not hug the border.
        let padding_vertical = match self.kind {
            InputKind::TextArea => 15.0,
            _ => 0.0,
        };

        let (margin_vertical, margin_bottom) = match self.kind {
            InputKind::Search => (0.0, 15.0),
            _ => (8.0, 0.0),
        };

        InputStyles {
            height,
            background: theme.palette.card_background.clone(),
            border_color: theme.palette.placeholder.clone(),
            border_width: border::THIN,
            border_radius: radius::INPUT,
            padding_horizontal,
            padding_vertical,
            margin_vertical,
            margin_bottom,
            font_size: font_size::MD,
            text_color: theme.palette.text.clone(),
            placeholder_color: theme.palette.placeholder.clone(),
            align_top: self.is_multiline(),
        }
    }
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq)]
pub struct InputStyles {
    /// Field height
    pub height: f32,
    /// Fill color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Horizontal inner padding
    pub padding_horizontal: f32,
    /// Vertical inner padding
    pub padding_vertical: f32,
    /// Vertical outer margin
    pub margin_vertical: f32,
    /// Bottom outer margin
    pub margin_bottom: f32,
    /// Entered text size
    pub font_size: f32,
    /// Entered text color
    pub text_color: Color,
    /// Placeholder text color
    pub placeholder_color: Color,
    /// Whether text anchors to the top edge (multiline fields)
    pub align_top: bool,
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon glyph name
    pub name: String,
    /// Rendered size in points
    pub size: f32,
    /// Color override; the theme text color is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Icon {
    /// Create a new icon at the standard action size
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: sizing::icon::ACTION,
            color: None,
        }
    }

    /// Set the size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Resolve the color, falling back to the theme text color
    pub fn resolved_color(&self, theme: &Theme) -> Color {
        self.color
            .clone()
            .unwrap_or_else(|| theme.palette.text.clone())
    }
}

// =============================================================================
// Card Component
// =============================================================================

/// Card component props
///
/// Cards are the elevated surfaces behind feed offers, swap sessions,
/// and inbox entries. Content spacing is owned by the card itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Inner padding around card content
    pub content_padding: f32,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            content_padding: 16.0,
        }
    }
}

impl Card {
    /// Create a card with default content padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Get computed styles for this card based on theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        CardStyles {
            background: theme.palette.card_background.clone(),
            border_radius: radius::CARD,
            margin_vertical: 8.0,
            elevation: elevation::CARD,
            shadow: shadows::card(),
            content_padding: self.content_padding,
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyles {
    /// Surface color
    pub background: Color,
    /// Corner radius
    pub border_radius: f32,
    /// Vertical outer margin between stacked cards
    pub margin_vertical: f32,
    /// Drop shadow elevation
    pub elevation: u8,
    /// Drop shadow parameters
    pub shadow: Shadow,
    /// Inner padding around card content
    pub content_padding: f32,
}

// =============================================================================
// Tag Component
// =============================================================================

/// Tag visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVariant {
    /// Outlined category chip on offer cards
    #[default]
    Category,
    /// Filled chip for skills the user teaches
    Teach,
    /// Lighter filled chip for skills the user wants to learn
    Learn,
}

/// Tag component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag label text
    pub label: String,
    /// Visual variant
    #[serde(default)]
    pub variant: TagVariant,
}

impl Tag {
    /// Create a tag with an explicit variant
    pub fn new(label: impl Into<String>, variant: TagVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Create an outlined category chip
    pub fn category(label: impl Into<String>) -> Self {
        Self::new(label, TagVariant::Category)
    }

    /// Create a filled taught-skill chip
    pub fn teach(label: impl Into<String>) -> Self {
        Self::new(label, TagVariant::Teach)
    }

    /// Create a filled wanted-skill chip
    pub fn learn(label: impl Into<String>) -> Self {
        Self::new(label, TagVariant::Learn)
    }

    /// Get computed styles for this tag based on theme
    pub fn computed_styles(&self, theme: &Theme) -> TagStyles {
        let palette = &theme.palette;
        match self.variant {
            TagVariant::Category => TagStyles {
                background: None,
                text_color: palette.primary.clone(),
                border_color: Some(palette.primary.clone()),
                border_width: border::THIN,
                border_radius: radius::TAG,
                padding_horizontal: 8.0,
                padding_vertical: 2.0,
                font_size: font_size::XS,
                font_weight: font_weight::SEMI_BOLD,
                opacity: opacity::CATEGORY_TAG,
            },
            TagVariant::Teach => TagStyles {
                background: Some(palette.primary.clone()),
                text_color: palette.button_text.clone(),
                border_color: None,
                border_width: border::NONE,
                border_radius: radius::SKILL_TAG,
                padding_horizontal: 12.0,
                padding_vertical: 6.0,
                font_size: font_size::SM,
                font_weight: font_weight::SEMI_BOLD,
                opacity: opacity::FULL,
            },
            TagVariant::Learn => TagStyles {
                background: Some(palette.secondary.clone()),
                text_color: palette.text.clone(),
                border_color: None,
                border_width: border::NONE,
                border_radius: radius::SKILL_TAG,
                padding_horizontal: 12.0,
                padding_vertical: 6.0,
                font_size: font_size::SM,
                font_weight: font_weight::SEMI_BOLD,
                opacity: opacity::LEARNER_TAG,
            },
        }
    }
}

/// Computed tag styles
#[derive(Debug, Clone, PartialEq)]
pub struct TagStyles {
    /// Fill color, None for outlined chips
    pub background: Option<Color>,
    /// Label color
    pub text_color: Color,
    /// Border color, None when borderless
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Horizontal inner padding
    pub padding_horizontal: f32,
    /// Vertical inner padding
    pub padding_vertical: f32,
    /// Label font size
    pub font_size: f32,
    /// Label font weight
    pub font_weight: u16,
    /// Chip opacity
    pub opacity: f32,
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// A single entry in the bottom tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBarItem {
    /// The tab this entry selects
    pub tab: MainTab,
    /// Whether this entry is the active one
    pub is_active: bool,
}

impl TabBarItem {
    /// Get computed styles for this item based on theme
    pub fn computed_styles(&self, theme: &Theme) -> TabItemStyles {
        let tint = if self.is_active {
            theme.palette.primary.clone()
        } else {
            theme.palette.light_text.clone()
        };
        TabItemStyles {
            tint,
            icon_size: sizing::icon::ACTION,
            label_size: font_size::XS,
        }
    }
}

/// Bottom tab bar over the four main sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBar {
    items: Vec<TabBarItem>,
}

impl TabBar {
    /// Create a tab bar with the given tab active
    pub fn new(active: MainTab) -> Self {
        let items = MainTab::all()
            .into_iter()
            .map(|tab| TabBarItem {
                tab,
                is_active: tab == active,
            })
            .collect();
        Self { items }
    }

    /// Move the active flag to the given tab
    pub fn set_active(&mut self, tab: MainTab) {
        for item in &mut self.items {
            item.is_active = item.tab == tab;
        }
    }

    /// The currently active tab
    pub fn active_tab(&self) -> MainTab {
        self.items
            .iter()
            .find(|item| item.is_active)
            .map(|item| item.tab)
            .unwrap_or_default()
    }

    /// The items in display order
    pub fn items(&self) -> &[TabBarItem] {
        &self.items
    }

    /// Get computed styles for the bar based on theme
    pub fn computed_styles(&self, theme: &Theme) -> TabBarStyles {
        TabBarStyles {
            background: theme.palette.card_background.clone(),
            border_top_color: theme.palette.placeholder.clone(),
            border_top_width: border::THIN,
            height: sizing::tab_bar::HEIGHT,
            padding_top: sizing::tab_bar::PADDING_Y,
            padding_bottom: sizing::tab_bar::PADDING_Y,
        }
    }
}

/// Computed tab bar styles
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarStyles {
    /// Bar background
    pub background: Color,
    /// Top hairline color
    pub border_top_color: Color,
    /// Top hairline width
    pub border_top_width: f32,
    /// Bar height
    pub height: f32,
    /// Top inner padding
    pub padding_top: f32,
    /// Bottom inner padding
    pub padding_bottom: f32,
}

/// Computed tab item styles
#[derive(Debug, Clone, PartialEq)]
pub struct TabItemStyles {
    /// Icon and label tint
    pub tint: Color,
    /// Icon size
    pub icon_size: f32,
    /// Label font size
    pub label_size: f32,
}

// =============================================================================
// Floating Action Button Component
// =============================================================================

/// Floating action button props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fab {
    /// Icon glyph name
    pub icon: String,
}

impl Default for Fab {
    fn default() -> Self {
        Self {
            icon: "add".to_string(),
        }
    }
}

impl Fab {
    /// Create the default add button
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon glyph
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Get computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> FabStyles {
        FabStyles {
            size: sizing::fab::SIZE,
            border_radius: radius::FAB,
            background: theme.palette.secondary.clone(),
            icon_color: theme.palette.button_text.clone(),
            icon_size: sizing::icon::ACTION,
            offset_right: sizing::fab::OFFSET_RIGHT,
            offset_bottom: sizing::fab::OFFSET_BOTTOM,
            elevation: elevation::FAB,
            z_index: z_index::FAB,
        }
    }
}

/// Computed floating action button styles
#[derive(Debug, Clone, PartialEq)]
pub struct FabStyles {
    /// Button diameter
    pub size: f32,
    /// Corner radius (half the diameter)
    pub border_radius: f32,
    /// Fill color
    pub background: Color,
    /// Icon color
    pub icon_color: Color,
    /// Icon size
    pub icon_size: f32,
    /// Distance from the right edge
    pub offset_right: f32,
    /// Distance from the bottom edge, clearing the tab bar
    pub offset_bottom: f32,
    /// Drop shadow elevation
    pub elevation: u8,
    /// Stacking order above scrolling content
    pub z_index: i32,
}

// =============================================================================
// Header Bar Component
// =============================================================================

/// Stack header shown above pushed screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBar {
    /// Header title
    pub title: String,
    /// Whether a back affordance is shown
    #[serde(default)]
    pub show_back: bool,
}

impl HeaderBar {
    /// Create a header bar with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_back: false,
        }
    }

    /// Show the back affordance
    pub fn with_back(mut self) -> Self {
        self.show_back = true;
        self
    }

    /// Get computed styles for this header based on theme
    pub fn computed_styles(&self, theme: &Theme) -> HeaderBarStyles {
        HeaderBarStyles {
            background: theme.palette.card_background.clone(),
            title_color: theme.palette.text.clone(),
            border_bottom_color: theme.palette.placeholder.clone(),
            border_bottom_width: border::THIN,
            height: 56.0,
        }
    }
}

/// Computed header bar styles
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBarStyles {
    /// Bar background
    pub background: Color,
    /// Title color
    pub title_color: Color,
    /// Bottom hairline color
    pub border_bottom_color: Color,
    /// Bottom hairline width
    pub border_bottom_width: f32,
    /// Bar height
    pub height: f32,
}
