//! Scenario modifier tables
//!
//! Every combat round plays out under one of five scenarios. A scenario
//! shifts each attribute up or down before it is compared against the
//! round's draws. Tables are validated once at construction: a given
//! (scenario, attribute) slot may carry an increment or a decrement but
//! never both, and no delta exceeds 2.

use serde::{Deserialize, Serialize};

use crate::core::constants::{ATTRIBUTE_COUNT, ATTRIBUTE_MAX, MAX_MODIFIER, SCENARIO_COUNT};
use crate::core::error::{ArenaError, Result};

/// The five named combat scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    Firestorm,
    Quagmire,
    Gale,
    Eclipse,
    Ambush,
}

impl Scenario {
    pub const ALL: [Scenario; SCENARIO_COUNT] = [
        Scenario::Firestorm,
        Scenario::Quagmire,
        Scenario::Gale,
        Scenario::Eclipse,
        Scenario::Ambush,
    ];

    /// Scenario for a bounded selector draw
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SCENARIO_COUNT]
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }
}

/// Per-attribute deltas for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioModifiers {
    pub increments: [u8; ATTRIBUTE_COUNT],
    pub decrements: [u8; ATTRIBUTE_COUNT],
}

/// Static table of scenario modifiers for one engagement family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierTable {
    scenarios: [ScenarioModifiers; SCENARIO_COUNT],
}

impl ModifierTable {
    /// Build a table, rejecting any slot that breaks the construction rules
    pub fn new(scenarios: [ScenarioModifiers; SCENARIO_COUNT]) -> Result<Self> {
        for (scenario, modifiers) in scenarios.iter().enumerate() {
            for attribute in 0..ATTRIBUTE_COUNT {
                let inc = modifiers.increments[attribute];
                let dec = modifiers.decrements[attribute];
                if (inc != 0 && dec != 0) || inc > MAX_MODIFIER || dec > MAX_MODIFIER {
                    return Err(ArenaError::InvalidModifier {
                        scenario,
                        attribute,
                    });
                }
            }
        }
        Ok(Self { scenarios })
    }

    /// The table shipped with the crate
    pub fn standard() -> Self {
        // Each scenario favors a different attribute band.
        let scenarios = [
            // Firestorm: early attributes surge, late ones suffer
            ScenarioModifiers {
                increments: [2, 2, 1, 1, 0, 0, 0, 0, 0, 0],
                decrements: [0, 0, 0, 0, 0, 0, 1, 1, 2, 2],
            },
            // Quagmire: middle band bogs down
            ScenarioModifiers {
                increments: [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                decrements: [0, 0, 1, 2, 2, 2, 1, 0, 0, 0],
            },
            // Gale: alternating gusts
            ScenarioModifiers {
                increments: [1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
                decrements: [0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
            },
            // Eclipse: everything dims slightly
            ScenarioModifiers {
                increments: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                decrements: [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            },
            // Ambush: late attributes rewarded
            ScenarioModifiers {
                increments: [0, 0, 0, 0, 0, 0, 1, 1, 2, 2],
                decrements: [2, 2, 1, 1, 0, 0, 0, 0, 0, 0],
            },
        ];
        Self::new(scenarios).expect("standard table satisfies construction rules")
    }

    /// Attribute value after applying the scenario's deltas
    ///
    /// The increment is applied and capped at 10 before the decrement is
    /// subtracted, floored at 0. Order matters for parity.
    pub fn adjusted(&self, scenario: Scenario, attribute: usize, base: u8) -> u8 {
        let modifiers = &self.scenarios[scenario.index()];
        let raised = (base + modifiers.increments[attribute]).min(ATTRIBUTE_MAX);
        raised.saturating_sub(modifiers.decrements[attribute])
    }
}

impl Default for ModifierTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> ScenarioModifiers {
        ScenarioModifiers {
            increments: [0; 10],
            decrements: [0; 10],
        }
    }

    #[test]
    fn test_standard_table_constructs() {
        // expect() inside standard() would panic if the rules were broken
        let _ = ModifierTable::standard();
    }

    #[test]
    fn test_both_deltas_nonzero_rejected() {
        let mut bad = flat();
        bad.increments[4] = 1;
        bad.decrements[4] = 1;
        let err = ModifierTable::new([bad, flat(), flat(), flat(), flat()]).unwrap_err();
        assert_eq!(
            err,
            ArenaError::InvalidModifier {
                scenario: 0,
                attribute: 4
            }
        );
    }

    #[test]
    fn test_oversized_delta_rejected() {
        let mut bad = flat();
        bad.decrements[9] = 3;
        let err = ModifierTable::new([flat(), flat(), bad, flat(), flat()]).unwrap_err();
        assert_eq!(
            err,
            ArenaError::InvalidModifier {
                scenario: 2,
                attribute: 9
            }
        );
    }

    #[test]
    fn test_increment_caps_at_ten_before_decrement() {
        let mut shifted = flat();
        shifted.increments[0] = 2;
        let mut lowered = flat();
        lowered.decrements[0] = 2;
        let table =
            ModifierTable::new([shifted, lowered, flat(), flat(), flat()]).unwrap();

        // 9 + 2 caps at 10, not 11
        assert_eq!(table.adjusted(Scenario::Firestorm, 0, 9), 10);
        // 1 - 2 floors at 0
        assert_eq!(table.adjusted(Scenario::Quagmire, 0, 1), 0);
        // Untouched attribute passes through
        assert_eq!(table.adjusted(Scenario::Firestorm, 5, 7), 7);
    }

    #[test]
    fn test_scenario_from_index_wraps() {
        assert_eq!(Scenario::from_index(0), Scenario::Firestorm);
        assert_eq!(Scenario::from_index(4), Scenario::Ambush);
        assert_eq!(Scenario::from_index(5), Scenario::Firestorm);
    }
}
