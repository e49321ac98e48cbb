//! Transient user notices
//!
//! Screens surface one-shot feedback (posted confirmations, validation
//! failures, offer detail stubs) as notices. The shell collects them in
//! a [`NoticeCenter`] and the rendering host drains and presents them,
//! so screen logic never blocks on presentation.

use serde::{Deserialize, Serialize};

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Neutral information
    #[default]
    Info,
    /// A completed action
    Success,
    /// A failed action
    Error,
}

/// A single one-shot message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity of the notice
    pub kind: NoticeKind,
    /// Message text
    pub message: String,
}

impl Notice {
    /// Create an informational notice
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Ordered queue of pending notices
///
/// Notices accumulate in post order until the host drains them with
/// [`NoticeCenter::take`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeCenter {
    queue: Vec<Notice>,
}

impl NoticeCenter {
    /// Create an empty notice center
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice to the queue
    pub fn post(&mut self, notice: Notice) {
        self.queue.push(notice);
    }

    /// Drain all pending notices in post order
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.queue)
    }

    /// Whether any notices are pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending notices
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// The pending notices without draining them
    pub fn pending(&self) -> &[Notice] {
        &self.queue
    }
}
