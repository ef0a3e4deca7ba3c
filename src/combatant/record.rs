//! Combatant record and attribute validation
//!
//! A combatant is a squad with a fixed 10-element attribute vector. Its
//! identity is a deterministic fingerprint of that vector: registering the
//! same attributes twice yields the same id and is rejected.

use std::hash::{BuildHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    ATTRIBUTE_COUNT, ATTRIBUTE_MAX, ATTRIBUTE_MIN, ATTRIBUTE_SUM, INITIAL_HEALTH,
};
use crate::core::error::{ArenaError, Result};
use crate::core::types::{BackerId, CombatantId};

/// Fixed attribute vector for a combatant
pub type Attributes = [u8; ATTRIBUTE_COUNT];

/// Lifecycle state of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombatantState {
    /// Registered, eligible to join an engagement
    #[default]
    NotReady,
    /// Enrolled in an engagement that has not yet started
    Ready,
    /// Fighting in an in-progress engagement
    InEngagement,
}

/// A registered combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    /// Identity that registered the combatant and receives its rewards
    pub backer: BackerId,
    pub attributes: Attributes,
    /// Non-increasing while the combatant is in an engagement
    pub health: u8,
    pub state: CombatantState,
}

impl Combatant {
    pub fn new(backer: BackerId, attributes: Attributes) -> Result<Self> {
        validate_attributes(&attributes)?;
        Ok(Self {
            id: fingerprint(&attributes),
            backer,
            attributes,
            health: INITIAL_HEALTH,
            state: CombatantState::NotReady,
        })
    }

    /// Revert to the idle state, restoring full health
    ///
    /// Called when the combatant leaves an engagement (elimination or
    /// survival), making it immediately re-eligible.
    pub(crate) fn reset(&mut self) {
        self.health = INITIAL_HEALTH;
        self.state = CombatantState::NotReady;
    }
}

/// Validate an attribute vector: each element in [1, 10], sum exactly 50
pub fn validate_attributes(attributes: &Attributes) -> Result<()> {
    for (index, &value) in attributes.iter().enumerate() {
        if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
            return Err(ArenaError::InvalidAttribute { index, value });
        }
    }
    let sum: u16 = attributes.iter().map(|&v| v as u16).sum();
    if sum != ATTRIBUTE_SUM {
        return Err(ArenaError::AttributesSumInvalid { sum });
    }
    Ok(())
}

// Fixed seeds keep the fingerprint stable across processes. The id only
// needs to be collision-resistant over the tiny space of valid vectors,
// not cryptographic.
const FINGERPRINT_SEEDS: (u64, u64, u64, u64) = (
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
);

/// Deterministic fingerprint of an attribute vector
pub fn fingerprint(attributes: &Attributes) -> CombatantId {
    let state = ahash::RandomState::with_seeds(
        FINGERPRINT_SEEDS.0,
        FINGERPRINT_SEEDS.1,
        FINGERPRINT_SEEDS.2,
        FINGERPRINT_SEEDS.3,
    );
    let mut hasher = state.build_hasher();
    attributes.hash(&mut hasher);
    CombatantId(hasher.finish())
}
