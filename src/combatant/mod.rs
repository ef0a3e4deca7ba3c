//! Combatant records and the registry that owns them

pub mod record;
pub mod registry;

pub use record::{fingerprint, validate_attributes, Attributes, Combatant, CombatantState};
pub use registry::CombatantRegistry;
