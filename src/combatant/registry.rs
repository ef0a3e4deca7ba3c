//! Keyed table of registered combatants

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::combatant::record::{Attributes, Combatant};
use crate::core::error::{ArenaError, Result};
use crate::core::types::{BackerId, CombatantId};

/// Owns all combatant records, keyed by fingerprint id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatantRegistry {
    combatants: HashMap<CombatantId, Combatant>,
}

impl CombatantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new combatant for `backer`
    ///
    /// Rejects out-of-range attributes, a wrong sum, or a vector whose
    /// fingerprint is already registered. No state changes on failure.
    pub fn register(&mut self, backer: BackerId, attributes: Attributes) -> Result<CombatantId> {
        let combatant = Combatant::new(backer, attributes)?;
        if self.combatants.contains_key(&combatant.id) {
            return Err(ArenaError::AlreadyExists);
        }
        let id = combatant.id;
        self.combatants.insert(id, combatant);
        Ok(id)
    }

    /// Read-only projection of a combatant
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}
