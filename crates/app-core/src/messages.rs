//! Inbox entries
//!
//! Read-only fixtures for the messages screen. There is no compose or
//! reply path; previews render verbatim, surrounding quotes included.

use serde::{Deserialize, Serialize};

/// A single inbox entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboxEntry {
    /// Sender or source label
    pub sender: String,
    /// Preview line shown under the sender
    pub preview: String,
}

/// Returns the fixed inbox
pub fn inbox() -> Vec<InboxEntry> {
    vec![
        InboxEntry {
            sender: "Ali K.".to_string(),
            preview: "\"Are you free next week for the coding swap?\"".to_string(),
        },
        InboxEntry {
            sender: "System Notifications".to_string(),
            preview: "\"Your Graphic Design offer was viewed 5 times.\"".to_string(),
        },
    ]
}
