//! Randomness request/continuation protocol
//!
//! Each combat round consumes exactly one oracle request producing 11 raw
//! draws: ten attribute draws and one scenario selector. Requests are
//! correlated back to their engagement through the pending table; a request
//! id is consumed at most once, and unknown ids are rejected without side
//! effects. At most one request is outstanding per in-progress engagement.

use std::collections::HashMap;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{ATTRIBUTE_COUNT, DRAWS_PER_ROUND, DRAW_RANGE, SCENARIO_COUNT};
use crate::core::error::{ArenaError, Result};
use crate::core::types::{EngagementId, RequestId};
use crate::modifiers::Scenario;

/// Raw values delivered by one oracle fulfillment
pub type RawDraws = [u64; DRAWS_PER_ROUND];

/// Bounded attribute draws for one round, each in [0, 10]
pub type RoundDraws = [u8; ATTRIBUTE_COUNT];

/// Randomness provider boundary
///
/// `request_draws` is asynchronous: the oracle hands back an opaque id now
/// and delivers raw values later through `Arena::on_draws_ready`.
pub trait RandomnessOracle {
    fn request_draws(&mut self, confirmation_depth: u32) -> RequestId;
}

/// Book-keeping for one outstanding request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDraws {
    pub engagement: EngagementId,
    /// Zeroed buffer, filled on fulfillment
    pub draws: RoundDraws,
    /// Scenario placeholder, filled on fulfillment
    pub scenario: u8,
}

/// Keyed table of outstanding requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingRequests {
    pending: HashMap<RequestId, PendingDraws>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a request for the next round of `engagement`
    pub fn issue<O: RandomnessOracle>(
        &mut self,
        oracle: &mut O,
        confirmation_depth: u32,
        engagement: EngagementId,
    ) -> RequestId {
        let request = oracle.request_draws(confirmation_depth);
        self.pending.insert(
            request,
            PendingDraws {
                engagement,
                draws: [0; ATTRIBUTE_COUNT],
                scenario: 0,
            },
        );
        request
    }

    /// Engagement a request correlates to, if known
    pub fn engagement_for(&self, request: RequestId) -> Option<EngagementId> {
        self.pending.get(&request).map(|p| p.engagement)
    }

    /// The outstanding request for an engagement, if one exists
    ///
    /// At most one request is outstanding per in-progress engagement.
    pub fn request_for(&self, engagement: EngagementId) -> Option<RequestId> {
        self.pending
            .iter()
            .find(|(_, p)| p.engagement == engagement)
            .map(|(&id, _)| id)
    }

    /// Consume a request, enforcing at-most-once fulfillment
    pub fn consume(&mut self, request: RequestId) -> Result<PendingDraws> {
        self.pending.remove(&request).ok_or(ArenaError::UnknownRequest)
    }

    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }
}

/// Map raw oracle values into bounded draws
///
/// Attribute draws land in [0, 10] via `raw % 11`; the final value selects
/// the scenario via `raw % 5`.
pub fn map_draws(raw: &RawDraws) -> (RoundDraws, Scenario) {
    let mut draws = [0u8; ATTRIBUTE_COUNT];
    for (slot, &value) in draws.iter_mut().zip(raw.iter()) {
        *slot = (value % (DRAW_RANGE + 1)) as u8;
    }
    let scenario = Scenario::from_index((raw[ATTRIBUTE_COUNT] % SCENARIO_COUNT as u64) as usize);
    (draws, scenario)
}

/// Seeded oracle for tests and offline simulation
///
/// Produces opaque request ids and, on demand, the raw draw vectors a real
/// oracle would deliver asynchronously.
#[derive(Debug, Clone)]
pub struct LocalOracle {
    rng: ChaCha8Rng,
}

impl LocalOracle {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Raw values for the next fulfillment
    pub fn draw_raw(&mut self) -> RawDraws {
        let mut raw = [0u64; DRAWS_PER_ROUND];
        for value in raw.iter_mut() {
            *value = self.rng.next_u64();
        }
        raw
    }
}

impl RandomnessOracle for LocalOracle {
    fn request_draws(&mut self, _confirmation_depth: u32) -> RequestId {
        RequestId::new()
    }
}
