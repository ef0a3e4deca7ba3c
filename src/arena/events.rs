//! Typed event log for arena activity
//!
//! Every externally observable transition lands here with a human-readable
//! description, so callers can replay what happened without tracing output.

use serde::{Deserialize, Serialize};

use crate::core::types::{Coins, CombatantId, EngagementId};
use crate::modifiers::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaEvent {
    pub event_type: ArenaEventType,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaEventType {
    CombatantRegistered {
        combatant: CombatantId,
    },
    EngagementCreated {
        engagement: EngagementId,
    },
    CountdownStarted {
        engagement: EngagementId,
    },
    CombatantJoined {
        engagement: EngagementId,
        combatant: CombatantId,
    },
    EngagementStarted {
        engagement: EngagementId,
    },
    RoundResolved {
        engagement: EngagementId,
        round: u32,
        scenario: Scenario,
    },
    CombatantEliminated {
        engagement: EngagementId,
        combatant: CombatantId,
        round: u32,
    },
    SurvivorDeclared {
        engagement: EngagementId,
        combatant: CombatantId,
    },
    RewardClaimed {
        engagement: EngagementId,
        amount: Coins,
    },
}

/// Append-only log of arena events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaEventLog {
    pub events: Vec<ArenaEvent>,
}

impl ArenaEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event_type: ArenaEventType, description: String) {
        self.events.push(ArenaEvent {
            event_type,
            description,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_order() {
        let mut log = ArenaEventLog::new();
        log.push(
            ArenaEventType::EngagementCreated {
                engagement: EngagementId(1),
            },
            "engagement 1 created".into(),
        );
        log.push(
            ArenaEventType::EngagementStarted {
                engagement: EngagementId(1),
            },
            "engagement 1 started".into(),
        );

        assert_eq!(log.len(), 2);
        assert!(matches!(
            log.events[0].event_type,
            ArenaEventType::EngagementCreated { .. }
        ));
        assert!(matches!(
            log.events[1].event_type,
            ArenaEventType::EngagementStarted { .. }
        ));
    }
}
