//! Engagement records and lifecycle management

pub mod manager;
pub mod record;

pub use record::{Engagement, EngagementState};
pub use manager::{EngagementManager, JoinOutcome};
