//! Fee custody boundary
//!
//! The engine never holds money itself: entry fees are deposited into a
//! treasury on join and paid back out on claim. The trait is the seam to a
//! real custody service; `InMemoryTreasury` backs tests and simulation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};
use crate::core::types::{BackerId, Coins};

/// Custody collaborator accepting deposits and paying rewards
pub trait Treasury {
    /// Take `amount` from `from` into custody
    fn deposit(&mut self, from: BackerId, amount: Coins) -> Result<()>;

    /// Pay `amount` out of custody to `to`
    ///
    /// Failures are fatal to the calling operation and must leave custody
    /// unchanged.
    fn transfer(&mut self, to: BackerId, amount: Coins) -> Result<()>;
}

/// Balance-tracking treasury for tests and offline simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryTreasury {
    balances: HashMap<BackerId, Coins>,
    /// Total held in custody (all deposits minus all payouts)
    vault: Coins,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a backer so it can afford entry fees
    pub fn fund(&mut self, backer: BackerId, amount: Coins) {
        *self.balances.entry(backer).or_insert(0) += amount;
    }

    pub fn balance(&self, backer: BackerId) -> Coins {
        self.balances.get(&backer).copied().unwrap_or(0)
    }

    pub fn vault(&self) -> Coins {
        self.vault
    }
}

impl Treasury for InMemoryTreasury {
    fn deposit(&mut self, from: BackerId, amount: Coins) -> Result<()> {
        let balance = self.balances.entry(from).or_insert(0);
        if *balance < amount {
            return Err(ArenaError::TransferFailed(format!(
                "backer balance {} cannot cover deposit {}",
                balance, amount
            )));
        }
        *balance -= amount;
        self.vault += amount;
        Ok(())
    }

    fn transfer(&mut self, to: BackerId, amount: Coins) -> Result<()> {
        if self.vault < amount {
            return Err(ArenaError::TransferFailed(format!(
                "vault {} cannot cover payout {}",
                self.vault, amount
            )));
        }
        self.vault -= amount;
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }
}
