//! Core types, errors, and constants shared across the crate

pub mod constants;
pub mod error;
pub mod types;

pub use error::{ArenaError, Result};
pub use types::{BackerId, Coins, CombatantId, EngagementId, RequestId, Timestamp};
