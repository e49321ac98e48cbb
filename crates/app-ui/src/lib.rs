//! User interface for SkillSwap
//!
//! This crate provides the UI layer, including components, screens,
//! navigation, theming, and design system primitives.
//!
//! # Design System
//!
//! The design system is built around the Material-inspired brand colors:
//! - Primary: Deep purple (#6200EE)
//! - Secondary: Teal (#03DAC6)
//! - Error: Dark red (#B00020)
//!
//! A single light theme is shipped; every screen resolves its styles
//! against it through the component layer.
//!
//! # Modules
//!
//! - [`theme`] - Theme and color palette
//! - [`tokens`] - Design tokens (spacing, sizing, radii, etc.)
//! - [`typography`] - Typography system and text styles
//! - [`components`] - UI component library
//! - [`screens`] - Application screens and their views
//! - [`navigation`] - Navigation stack and tab model
//! - [`notices`] - Transient user notices
//! - [`app`] - The event-driven application shell
//!
//! # Example
//!
//! ```rust
//! use app_ui::app::{App, AppEvent};
//! use app_ui::navigation::Route;
//!
//! // Start at the login screen and log in
//! let mut app = App::new();
//! app.handle(AppEvent::LoginEmailChanged("a@b.com".into()));
//! app.handle(AppEvent::LoginPasswordChanged("hunter2".into()));
//! app.handle(AppEvent::LoginSubmitted);
//!
//! assert_eq!(app.current_route(), Route::MainTabs);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod components;
pub mod navigation;
pub mod notices;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use app::{App, AppEvent, AppView, ScreenView};

pub use theme::{light_theme, Color, Palette, Theme};

pub use tokens::{
    border, content_width, elevation, font_weight, opacity, radius, shadows, sizing, spacing,
    z_index, Shadow,
};

pub use typography::{font_size, TextStyle, TypographyVariant};

pub use navigation::{
    HeaderConfig, MainTab, NavRequest, NavigationStack, Navigator, PendingNavigation, Route,
    StackEntry,
};

pub use notices::{Notice, NoticeCenter, NoticeKind};
