//! Core application logic for SkillSwap
//!
//! This crate contains the shared domain layer for authentication,
//! the skill offer catalog, offer drafting, swaps, messages, and
//! profile data. Everything here is synchronous and in-memory: there
//! is no backend, and the fixture data is fixed for the process
//! lifetime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod composer;
pub mod messages;
pub mod offers;
pub mod profiles;
pub mod swaps;
