//! Active swap bookings
//!
//! Read-only fixtures for the swaps screen. The cancel action renders on
//! cancellable bookings but is wired to nothing.

use serde::{Deserialize, Serialize};

/// Status of a swap booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SwapStatus {
    /// Confirmed for a specific slot
    Booked {
        /// Human-readable slot, e.g. "Tuesday, 4 PM"
        slot: String,
    },
    /// Waiting on the other side to confirm
    PendingConfirmation,
}

impl SwapStatus {
    /// Returns the status line, e.g. "Status: Booked for Tuesday, 4 PM"
    pub fn status_line(&self) -> String {
        match self {
            SwapStatus::Booked { slot } => format!("Status: Booked for {}", slot),
            SwapStatus::PendingConfirmation => "Status: Pending Confirmation".to_string(),
        }
    }
}

/// Which side of the exchange the local user is on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ExchangeRole {
    /// The local user provides the named skill
    Giving,
    /// The local user receives the named skill
    Receiving,
}

/// A booked or pending swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapBooking {
    /// Session title
    pub title: String,
    /// Booking status
    pub status: SwapStatus,
    /// Direction of the exchange
    pub role: ExchangeRole,
    /// The skill moving in that direction
    pub skill: String,
    /// Whether the booking renders a cancel action
    pub cancellable: bool,
}

impl SwapBooking {
    /// Returns the exchange line, e.g. "You are giving: Logo Design"
    pub fn exchange_line(&self) -> String {
        match self.role {
            ExchangeRole::Giving => format!("You are giving: {}", self.skill),
            ExchangeRole::Receiving => format!("You are receiving: {}", self.skill),
        }
    }
}

/// Returns the fixed bookings list
pub fn active_swaps() -> Vec<SwapBooking> {
    vec![
        SwapBooking {
            title: "Data Structures Session".to_string(),
            status: SwapStatus::Booked {
                slot: "Tuesday, 4 PM".to_string(),
            },
            role: ExchangeRole::Giving,
            skill: "Logo Design".to_string(),
            cancellable: true,
        },
        SwapBooking {
            title: "Public Speaking Practice".to_string(),
            status: SwapStatus::PendingConfirmation,
            role: ExchangeRole::Receiving,
            skill: "Speaking Coach".to_string(),
            cancellable: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_fixed_bookings() {
        assert_eq!(active_swaps().len(), 2);
    }

    #[test]
    fn test_status_lines() {
        let swaps = active_swaps();
        assert_eq!(
            swaps[0].status.status_line(),
            "Status: Booked for Tuesday, 4 PM"
        );
        assert_eq!(swaps[1].status.status_line(), "Status: Pending Confirmation");
    }

    #[test]
    fn test_exchange_lines() {
        let swaps = active_swaps();
        assert_eq!(swaps[0].exchange_line(), "You are giving: Logo Design");
        assert_eq!(swaps[1].exchange_line(), "You are receiving: Speaking Coach");
    }

    #[test]
    fn test_only_first_booking_cancellable() {
        let swaps = active_swaps();
        assert!(swaps[0].cancellable);
        assert!(!swaps[1].cancellable);
    }

    #[test]
    fn test_booking_serialization() {
        let swaps = active_swaps();
        let json = serde_json::to_string(&swaps).unwrap();
        let back: Vec<SwapBooking> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, swaps);
    }
}
