//! Engagement record and lifecycle state

use serde::{Deserialize, Serialize};

use crate::core::types::{Coins, CombatantId, EngagementId, Timestamp};

/// Lifecycle of an engagement
///
/// `NotReady` is the absent-record state; a created engagement starts at
/// `Ready` and only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngagementState {
    #[default]
    NotReady,
    /// Accepting registrations
    Ready,
    /// Combat rounds running
    InProgress,
    /// Exactly one survivor determined; terminal
    Completed,
}

/// A timed, fee-gated elimination tournament instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    pub id: EngagementId,
    /// Entry fee each join must cover
    pub fee: Coins,
    /// Roster size required before the engagement may start
    pub min_participants: usize,
    /// Countdown window in seconds, bounded at creation
    pub countdown_delay: u64,
    /// Zero until the first qualifying join starts the clock
    pub countdown_start: Timestamp,
    /// Accumulated entry fees, paid out once on claim
    pub pool: Coins,
    /// Advances only while InProgress
    pub round: u32,
    /// Set when the engagement completes
    pub survivor: Option<CombatantId>,
    pub state: EngagementState,
    /// Active combatants in join order; shrinks as eliminations land
    pub roster: Vec<CombatantId>,
}

impl Engagement {
    pub fn new(id: EngagementId, min_participants: usize, fee: Coins, countdown_delay: u64) -> Self {
        Self {
            id,
            fee,
            min_participants,
            countdown_delay,
            countdown_start: 0,
            pool: 0,
            round: 1,
            survivor: None,
            state: EngagementState::Ready,
            roster: Vec::new(),
        }
    }

    /// Has the countdown clock been started and its window elapsed?
    pub fn countdown_elapsed(&self, now: Timestamp) -> bool {
        self.countdown_start != 0 && now >= self.countdown_start + self.countdown_delay
    }
}
