//! Skill offer catalog
//!
//! Read-only feed data for the home screen. The catalog is fixed for the
//! process lifetime; posting a new offer never appends to it.

use serde::{Deserialize, Serialize};

/// A skill offer shown on the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillOffer {
    /// Stable identifier within the catalog
    pub id: String,
    /// Offer title
    pub title: String,
    /// Display name of the tutor
    pub tutor: String,
    /// Average rating out of 5
    pub rating: f32,
    /// Category tag
    pub category: String,
}

impl SkillOffer {
    /// Returns the rating line shown beside the title, e.g. "4.8 ★"
    pub fn rating_line(&self) -> String {
        format!("{} ★", self.rating)
    }

    /// Returns the attribution line, e.g. "Offered by: M Ali ."
    pub fn tutor_line(&self) -> String {
        format!("Offered by: {}", self.tutor)
    }
}

/// Returns the fixed offer catalog
pub fn sample_offers() -> Vec<SkillOffer> {
    vec![
        SkillOffer {
            id: "1".to_string(),
            title: "Data Structures Tutoring".to_string(),
            tutor: "M Ali .".to_string(),
            rating: 4.8,
            category: "Tech".to_string(),
        },
        SkillOffer {
            id: "2".to_string(),
            title: "Poster Design for Club Event".to_string(),
            tutor: "Raheel Nawaz.".to_string(),
            rating: 4.5,
            category: "Design".to_string(),
        },
        SkillOffer {
            id: "3".to_string(),
            title: "Public Speaking Coaching".to_string(),
            tutor: "Mahad.".to_string(),
            rating: 4.9,
            category: "Communication".to_string(),
        },
        SkillOffer {
            id: "4".to_string(),
            title: "Introduction to Web Design (HTML/CSS)".to_string(),
            tutor: "M Rameez.".to_string(),
            rating: 4.7,
            category: "Tech".to_string(),
        },
    ]
}
