use thiserror::Error;

use crate::core::types::{CombatantId, EngagementId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    // Validation
    #[error("attribute {index} out of range: {value} (must be 1-10)")]
    InvalidAttribute { index: usize, value: u8 },

    #[error("attribute sum {sum} invalid (must be exactly 50)")]
    AttributesSumInvalid { sum: u16 },

    #[error("engagement id 0 is reserved")]
    InvalidEngagementId,

    #[error("countdown delay {0}s exceeds the 7-day bound")]
    InvalidCountdownDelay(u64),

    #[error("modifier table invalid at scenario {scenario}, attribute {attribute}")]
    InvalidModifier { scenario: usize, attribute: usize },

    #[error("combatant not found: {0:?}")]
    CombatantNotFound(CombatantId),

    #[error("engagement not found: {0:?}")]
    EngagementNotFound(EngagementId),

    // State conflicts
    #[error("record already exists")]
    AlreadyExists,

    #[error("engagement is not accepting registrations")]
    EngagementNotReady,

    #[error("combatant is already enrolled elsewhere")]
    CombatantBusy,

    #[error("engagement already started")]
    EngagementInProgress,

    #[error("rostered combatant {0:?} is not ready")]
    CombatantNotReady(CombatantId),

    // Authorization
    #[error("caller is not authorized for this operation")]
    NotAuthorized,

    // Economic
    #[error("paid {paid} but the entry fee is {fee}")]
    InsufficientFee { paid: u64, fee: u64 },

    #[error("roster has {got} combatants, minimum is {min}")]
    NotEnoughParticipants { got: usize, min: usize },

    #[error("nothing to claim")]
    NothingToClaim,

    // Integrity
    #[error("unknown randomness request")]
    UnknownRequest,

    // Fatal
    #[error("treasury transfer failed: {0}")]
    TransferFailed(String),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
