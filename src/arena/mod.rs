//! Arena facade: the transactional call surface
//!
//! Wires the combatant registry, engagement manager, randomness protocol,
//! combat engine, and treasury into one coordinator. Every public method is
//! a complete transaction: it either finishes with all bookkeeping applied
//! or rejects before any state changes.

pub mod events;

use tracing::{debug, info};

use crate::combatant::{Attributes, Combatant, CombatantRegistry};
use crate::combat::{resolve_round, RoundOutcome};
use crate::core::constants::DEFAULT_CONFIRMATION_DEPTH;
use crate::core::error::{ArenaError, Result};
use crate::core::types::{BackerId, Coins, CombatantId, EngagementId, RequestId, Timestamp};
use crate::engagement::{Engagement, EngagementManager, EngagementState};
use crate::ledger::Treasury;
use crate::modifiers::ModifierTable;
use crate::randomness::{map_draws, PendingRequests, RandomnessOracle, RawDraws};

pub use events::{ArenaEvent, ArenaEventLog, ArenaEventType};

/// Coordinator owning all tournament state
#[derive(Debug)]
pub struct Arena<O: RandomnessOracle, T: Treasury> {
    /// Administrator: may create engagements and force-start them
    owner: BackerId,
    registry: CombatantRegistry,
    engagements: EngagementManager,
    table: ModifierTable,
    pending: PendingRequests,
    oracle: O,
    treasury: T,
    events: ArenaEventLog,
    confirmation_depth: u32,
}

impl<O: RandomnessOracle, T: Treasury> Arena<O, T> {
    pub fn new(owner: BackerId, table: ModifierTable, oracle: O, treasury: T) -> Self {
        Self {
            owner,
            registry: CombatantRegistry::new(),
            engagements: EngagementManager::new(),
            table,
            pending: PendingRequests::new(),
            oracle,
            treasury,
            events: ArenaEventLog::new(),
            confirmation_depth: DEFAULT_CONFIRMATION_DEPTH,
        }
    }

    /// Register a combatant for `caller`
    pub fn register_combatant(
        &mut self,
        caller: BackerId,
        attributes: Attributes,
    ) -> Result<CombatantId> {
        let id = self.registry.register(caller, attributes)?;
        self.events.push(
            ArenaEventType::CombatantRegistered { combatant: id },
            format!("combatant {} registered", id.0),
        );
        Ok(id)
    }

    /// Create an engagement; owner only
    pub fn create_engagement(
        &mut self,
        caller: BackerId,
        id: EngagementId,
        min_participants: usize,
        fee: Coins,
        countdown_delay: u64,
    ) -> Result<()> {
        if caller != self.owner {
            return Err(ArenaError::NotAuthorized);
        }
        self.engagements
            .create(id, min_participants, fee, countdown_delay)?;
        self.events.push(
            ArenaEventType::EngagementCreated { engagement: id },
            format!("engagement {} created", id.0),
        );
        Ok(())
    }

    /// Enroll a combatant in an engagement, paying the entry fee
    ///
    /// If this join lands after the countdown window with the minimum met,
    /// the engagement starts inline in the same transaction.
    pub fn join(
        &mut self,
        caller: BackerId,
        combatant: CombatantId,
        engagement: EngagementId,
        paid: Coins,
        now: Timestamp,
    ) -> Result<()> {
        let clock_was_unset = self
            .engagements
            .get(engagement)
            .map(|e| e.countdown_start == 0)
            .unwrap_or(false);

        let outcome = self.engagements.join(
            &mut self.registry,
            &mut self.treasury,
            caller,
            combatant,
            engagement,
            paid,
            now,
        )?;

        if clock_was_unset
            && self
                .engagements
                .get(engagement)
                .map(|e| e.countdown_start != 0)
                .unwrap_or(false)
        {
            self.events.push(
                ArenaEventType::CountdownStarted { engagement },
                format!("engagement {} countdown started", engagement.0),
            );
        }
        self.events.push(
            ArenaEventType::CombatantJoined {
                engagement,
                combatant,
            },
            format!("combatant {} joined engagement {}", combatant.0, engagement.0),
        );

        if outcome.start_due {
            // Self-triggered start: post-condition of the same transaction.
            self.start_engagement(engagement)?;
        }
        Ok(())
    }

    /// Start an engagement; owner only (joins may also start it themselves)
    pub fn start(&mut self, caller: BackerId, engagement: EngagementId) -> Result<()> {
        if caller != self.owner {
            return Err(ArenaError::NotAuthorized);
        }
        self.start_engagement(engagement)
    }

    fn start_engagement(&mut self, engagement: EngagementId) -> Result<()> {
        self.engagements.start(&mut self.registry, engagement)?;
        self.events.push(
            ArenaEventType::EngagementStarted { engagement },
            format!("engagement {} started", engagement.0),
        );
        let request = self
            .pending
            .issue(&mut self.oracle, self.confirmation_depth, engagement);
        debug!(
            engagement = engagement.0,
            request = %request.0,
            "round 1 draws requested"
        );
        Ok(())
    }

    /// Deliver one oracle fulfillment and resolve the corresponding round
    ///
    /// Unknown or replayed request ids are rejected with no state change.
    /// On a continuing round the counter advances and the next request is
    /// issued; on completion the survivor is recorded and no further
    /// request goes out.
    pub fn on_draws_ready(&mut self, request: RequestId, raw: RawDraws) -> Result<RoundOutcome> {
        // Validate before consuming: rejection must be side-effect-free.
        let engagement_id = self
            .pending
            .engagement_for(request)
            .ok_or(ArenaError::UnknownRequest)?;
        match self.engagements.get(engagement_id) {
            Some(e) if e.state == EngagementState::InProgress => {}
            _ => return Err(ArenaError::UnknownRequest),
        }
        self.pending.consume(request)?;

        let (draws, scenario) = map_draws(&raw);
        let engagement = self
            .engagements
            .get_mut(engagement_id)
            .expect("engagement checked above");
        let round = engagement.round;
        debug!(
            engagement = engagement_id.0,
            round,
            scenario = ?scenario,
            "resolving round"
        );

        let (outcome, report) = resolve_round(
            &mut engagement.roster,
            &mut self.registry,
            &self.table,
            scenario,
            &draws,
        );

        self.events.push(
            ArenaEventType::RoundResolved {
                engagement: engagement_id,
                round,
                scenario,
            },
            format!(
                "engagement {} round {} resolved under {:?}",
                engagement_id.0, round, scenario
            ),
        );
        for &combatant in &report.eliminated {
            self.events.push(
                ArenaEventType::CombatantEliminated {
                    engagement: engagement_id,
                    combatant,
                    round,
                },
                format!(
                    "combatant {} eliminated in round {}",
                    combatant.0, round
                ),
            );
        }

        let engagement = self
            .engagements
            .get_mut(engagement_id)
            .expect("engagement checked above");
        match outcome {
            RoundOutcome::Survivor(survivor) => {
                engagement.state = EngagementState::Completed;
                engagement.survivor = Some(survivor);
                engagement.roster.clear();
                if let Some(combatant) = self.registry.get_mut(survivor) {
                    combatant.reset();
                }
                self.events.push(
                    ArenaEventType::SurvivorDeclared {
                        engagement: engagement_id,
                        combatant: survivor,
                    },
                    format!(
                        "combatant {} survives engagement {}",
                        survivor.0, engagement_id.0
                    ),
                );
                info!(
                    engagement = engagement_id.0,
                    survivor = survivor.0,
                    rounds = round,
                    "engagement completed"
                );
            }
            RoundOutcome::Continuing => {
                engagement.round += 1;
                let next = self
                    .pending
                    .issue(&mut self.oracle, self.confirmation_depth, engagement_id);
                debug!(
                    engagement = engagement_id.0,
                    round = round + 1,
                    request = %next.0,
                    "next round draws requested"
                );
            }
        }
        Ok(outcome)
    }

    /// Pay out a completed engagement's pool to the survivor's backer
    pub fn claim(&mut self, engagement: EngagementId) -> Result<Coins> {
        let amount = self
            .engagements
            .claim(&self.registry, &mut self.treasury, engagement)?;
        self.events.push(
            ArenaEventType::RewardClaimed {
                engagement,
                amount,
            },
            format!("engagement {} pool of {} claimed", engagement.0, amount),
        );
        Ok(amount)
    }

    // --- read-only projections ---

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.registry.get(id)
    }

    pub fn engagement(&self, id: EngagementId) -> Option<&Engagement> {
        self.engagements.get(id)
    }

    pub fn events(&self) -> &[ArenaEvent] {
        &self.events.events
    }

    pub fn outstanding_requests(&self) -> usize {
        self.pending.outstanding()
    }

    /// The request currently awaiting fulfillment for an engagement
    pub fn pending_request(&self, engagement: EngagementId) -> Option<RequestId> {
        self.pending.request_for(engagement)
    }

    pub fn treasury(&self) -> &T {
        &self.treasury
    }

    pub fn treasury_mut(&mut self) -> &mut T {
        &mut self.treasury
    }
}
