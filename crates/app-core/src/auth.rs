//! Authentication flows for SkillSwap
//!
//! This module provides the login and signup form payloads and the
//! presence check that gates the login transition. There is no backend:
//! credentials are never verified against anything, and the values are
//! dropped as soon as the login screen unmounts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password empty after trimming
    #[error("Please enter your email and password.")]
    MissingCredentials,
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Login credentials
///
/// Built by [`validate_credentials`] once both fields pass the presence
/// check. The caller drops the value after navigating; nothing is stored
/// or sent anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Email address as typed (untrimmed)
    pub email: String,
    /// Password as typed (untrimmed)
    pub password: String,
}

/// Signup form payload
///
/// Held while the signup screen is mounted. None of the fields are
/// validated or used; account creation always succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupDetails {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Checks the login presence rule and builds credentials
///
/// Both fields must be non-empty after trimming. The untrimmed values
/// are kept in the returned credentials.
///
/// # Arguments
///
/// * `email` - Email field contents
/// * `password` - Password field contents
///
/// # Errors
///
/// - `AuthError::MissingCredentials` - either field is empty or whitespace
///
/// # Example
///
/// ```
/// use app_core::auth::validate_credentials;
///
/// assert!(validate_credentials("a@b.com", "hunter2").is_ok());
/// assert!(validate_credentials("   ", "hunter2").is_err());
/// ```
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials> {
    if email.trim().is_empty() || password.trim().is_empty() {
        tracing::debug!("login rejected: missing email or password");
        return Err(AuthError::MissingCredentials);
    }

    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
