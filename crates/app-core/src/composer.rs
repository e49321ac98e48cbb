//! Skill offer composer
//!
//! Draft state for the "Offer Your Skill" form. A draft lives only while
//! its screen is mounted: a successful submit logs the draft and the
//! screen pops, dropping the state. The offer catalog is never modified.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Draft validation error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// Title or description empty
    #[error("Please fill out all fields.")]
    MissingFields,
}

/// Result type for composer operations
pub type Result<T> = std::result::Result<T, DraftError>;

/// Skill offer draft
///
/// Title and description are required for submission; category is held
/// but never validated. The presence check runs on the raw strings, so
/// whitespace-only input passes (unlike the login form, which trims).
///
/// # Example
///
/// ```
/// use app_core::composer::SkillDraft;
///
/// let mut draft = SkillDraft::new();
/// draft.set_title("Python Basics");
/// draft.set_description("Weekly pair sessions, beginner friendly");
/// assert!(draft.submit().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillDraft {
    title: String,
    description: String,
    category: String,
}

impl SkillDraft {
    /// Creates an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the title field
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description field
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category field
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sets the title field
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the description field
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the category field
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Returns whether both required fields are filled
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Validates and submits the draft
    ///
    /// Logs the accepted draft. The caller discards the draft after
    /// navigating back; nothing is appended to the offer catalog.
    ///
    /// # Errors
    ///
    /// - `DraftError::MissingFields` - title or description is empty
    pub fn submit(&self) -> Result<()> {
        if !self.is_complete() {
            tracing::debug!("skill draft rejected: missing title or description");
            return Err(DraftError::MissingFields);
        }

        tracing::info!(
            title = %self.title,
            description = %self.description,
            "posted skill"
        );
        Ok(())
    }
}
