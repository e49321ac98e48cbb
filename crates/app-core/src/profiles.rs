//! Local profile summary
//!
//! Read-only fixture for the profile screen. The edit and logout actions
//! render but are wired to nothing.

use serde::{Deserialize, Serialize};

/// Profile summary for the local user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    /// Display name
    pub display_name: String,
    /// Contact email address
    pub email: String,
    /// Average rating across completed swaps
    pub avg_rating: f32,
    /// Skills the user tutors
    pub skills_offered: Vec<String>,
    /// Skills the user wants to learn
    pub skills_wanted: Vec<String>,
}

impl ProfileSummary {
    /// Returns the contact line, e.g. "j.basit@skillswap.com | Avg Rating: 4.6"
    pub fn contact_line(&self) -> String {
        format!("{} | Avg Rating: {}", self.email, self.avg_rating)
    }
}

/// Returns the fixed local profile
pub fn local_profile() -> ProfileSummary {
    ProfileSummary {
        display_name: "M Abdul Basit".to_string(),
        email: "j.basit@skillswap.com".to_string(),
        avg_rating: 4.6,
        skills_offered: vec![
            "Graphic Design".to_string(),
            "Creative Writing".to_string(),
        ],
        skills_wanted: vec!["Data Science".to_string(), "Yoga".to_string()],
    }
}
