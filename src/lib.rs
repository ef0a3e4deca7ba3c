//! Spiral Arena - multi-round elimination tournament engine
//!
//! Registered combatants enroll in timed, fee-gated engagements and fight
//! down to a single survivor through oracle-driven combat rounds; the
//! survivor's backer claims the pooled entry fees.
//!
//! The [`arena::Arena`] facade is the main entry point; the modules under
//! it can also be used directly for custom wiring.

pub mod arena;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod engagement;
pub mod ledger;
pub mod modifiers;
pub mod randomness;

pub use arena::{Arena, ArenaEvent, ArenaEventLog, ArenaEventType};
pub use combatant::{Attributes, Combatant, CombatantRegistry, CombatantState};
pub use crate::core::error::{ArenaError, Result};
pub use crate::core::types::{BackerId, Coins, CombatantId, EngagementId, RequestId, Timestamp};
pub use engagement::{Engagement, EngagementManager, EngagementState};
pub use ledger::{InMemoryTreasury, Treasury};
pub use modifiers::{ModifierTable, Scenario, ScenarioModifiers};
pub use randomness::{LocalOracle, PendingRequests, RandomnessOracle, RawDraws, RoundDraws};
