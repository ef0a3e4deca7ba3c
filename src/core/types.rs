//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for backers (owners of combatants, payers of fees)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackerId(pub Uuid);

impl BackerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BackerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for combatants
///
/// Derived deterministically from the combatant's attribute vector, so the
/// same ten attributes always yield the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u64);

/// Unique identifier for engagements (assigned by the administrator, nonzero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngagementId(pub u32);

impl EngagementId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Opaque identifier for an outstanding randomness request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock timestamp in seconds
pub type Timestamp = u64;

/// Monetary amount (entry fees, reward pools)
pub type Coins = u64;
