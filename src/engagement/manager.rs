//! Engagement manager: registration, countdown, and lifecycle transitions
//!
//! Owns the keyed table of engagements and their rosters. Combatant records
//! live in the `CombatantRegistry`; the manager only holds their ids.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::combatant::{CombatantRegistry, CombatantState};
use crate::core::constants::MAX_COUNTDOWN_SECS;
use crate::core::error::{ArenaError, Result};
use crate::core::types::{BackerId, Coins, CombatantId, EngagementId, Timestamp};
use crate::engagement::record::{Engagement, EngagementState};
use crate::ledger::Treasury;

/// Result of a successful join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// The countdown window has elapsed and the roster meets the minimum:
    /// the caller must run `start` in the same transaction.
    pub start_due: bool,
}

/// Owns all engagement records, keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementManager {
    engagements: HashMap<EngagementId, Engagement>,
}

impl EngagementManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new engagement in the Ready state
    pub fn create(
        &mut self,
        id: EngagementId,
        min_participants: usize,
        fee: Coins,
        countdown_delay: u64,
    ) -> Result<()> {
        if id.0 == 0 {
            return Err(ArenaError::InvalidEngagementId);
        }
        if self.engagements.contains_key(&id) {
            return Err(ArenaError::AlreadyExists);
        }
        if countdown_delay > MAX_COUNTDOWN_SECS {
            return Err(ArenaError::InvalidCountdownDelay(countdown_delay));
        }
        self.engagements
            .insert(id, Engagement::new(id, min_participants, fee, countdown_delay));
        info!(engagement = id.0, min_participants, fee, "engagement created");
        Ok(())
    }

    /// Enroll a combatant, collecting its entry fee
    ///
    /// All checks run before any mutation. On success the combatant is
    /// Ready and appended to the roster; the first qualifying join starts
    /// the countdown clock. The returned outcome tells the caller whether
    /// the start condition now holds.
    pub fn join<T: Treasury>(
        &mut self,
        registry: &mut CombatantRegistry,
        treasury: &mut T,
        caller: BackerId,
        combatant_id: CombatantId,
        engagement_id: EngagementId,
        paid: Coins,
        now: Timestamp,
    ) -> Result<JoinOutcome> {
        let combatant = registry
            .get(combatant_id)
            .ok_or(ArenaError::CombatantNotFound(combatant_id))?;
        if combatant.backer != caller {
            return Err(ArenaError::NotAuthorized);
        }
        let engagement = self
            .engagements
            .get(&engagement_id)
            .ok_or(ArenaError::EngagementNotFound(engagement_id))?;
        if engagement.state != EngagementState::Ready {
            return Err(ArenaError::EngagementNotReady);
        }
        if combatant.state != CombatantState::NotReady {
            return Err(ArenaError::CombatantBusy);
        }
        if paid < engagement.fee {
            return Err(ArenaError::InsufficientFee {
                paid,
                fee: engagement.fee,
            });
        }

        // Checks passed; custody first, then bookkeeping.
        treasury.deposit(caller, paid)?;

        let engagement = self
            .engagements
            .get_mut(&engagement_id)
            .expect("engagement checked above");
        if engagement.roster.len() < engagement.min_participants
            && engagement.countdown_start == 0
        {
            engagement.countdown_start = now;
            info!(
                engagement = engagement_id.0,
                start = now,
                delay = engagement.countdown_delay,
                "countdown started"
            );
        }
        engagement.pool += paid;
        engagement.roster.push(combatant_id);

        let combatant = registry
            .get_mut(combatant_id)
            .expect("combatant checked above");
        combatant.state = CombatantState::Ready;

        Ok(JoinOutcome {
            start_due: engagement.countdown_elapsed(now)
                && engagement.roster.len() >= engagement.min_participants,
        })
    }

    /// Flip the engagement to InProgress and its roster to InEngagement
    ///
    /// Authorization (owner or self) is the caller's responsibility; the
    /// caller must also issue the round-1 randomness request on success.
    pub fn start(
        &mut self,
        registry: &mut CombatantRegistry,
        engagement_id: EngagementId,
    ) -> Result<()> {
        let engagement = self
            .engagements
            .get(&engagement_id)
            .ok_or(ArenaError::EngagementNotFound(engagement_id))?;
        if engagement.state != EngagementState::Ready {
            return Err(ArenaError::EngagementInProgress);
        }
        if engagement.roster.len() < engagement.min_participants {
            return Err(ArenaError::NotEnoughParticipants {
                got: engagement.roster.len(),
                min: engagement.min_participants,
            });
        }
        for &id in &engagement.roster {
            let combatant = registry
                .get(id)
                .ok_or(ArenaError::CombatantNotFound(id))?;
            if combatant.state != CombatantState::Ready {
                return Err(ArenaError::CombatantNotReady(id));
            }
        }

        let engagement = self
            .engagements
            .get_mut(&engagement_id)
            .expect("engagement checked above");
        engagement.state = EngagementState::InProgress;
        let roster = engagement.roster.clone();
        for id in roster {
            if let Some(combatant) = registry.get_mut(id) {
                combatant.state = CombatantState::InEngagement;
            }
        }
        info!(engagement = engagement_id.0, "engagement started");
        Ok(())
    }

    /// Pay the accumulated pool to the survivor's backer, exactly once
    pub fn claim<T: Treasury>(
        &mut self,
        registry: &CombatantRegistry,
        treasury: &mut T,
        engagement_id: EngagementId,
    ) -> Result<Coins> {
        let engagement = self
            .engagements
            .get(&engagement_id)
            .ok_or(ArenaError::EngagementNotFound(engagement_id))?;
        if engagement.state != EngagementState::Completed || engagement.pool == 0 {
            return Err(ArenaError::NothingToClaim);
        }
        let survivor = engagement.survivor.ok_or(ArenaError::NothingToClaim)?;
        let backer = registry
            .get(survivor)
            .ok_or(ArenaError::CombatantNotFound(survivor))?
            .backer;
        let amount = engagement.pool;

        // Transfer first: a custody failure must leave the pool intact.
        treasury.transfer(backer, amount)?;

        let engagement = self
            .engagements
            .get_mut(&engagement_id)
            .expect("engagement checked above");
        engagement.pool = 0;
        info!(engagement = engagement_id.0, amount, "reward claimed");
        Ok(amount)
    }

    pub fn get(&self, id: EngagementId) -> Option<&Engagement> {
        self.engagements.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: EngagementId) -> Option<&mut Engagement> {
        self.engagements.get_mut(&id)
    }
}
