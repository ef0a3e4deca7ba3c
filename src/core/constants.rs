//! Tournament constants with documented rationale
//!
//! The combat numbers (attribute bounds, draw range, modifier cap) are load
//! bearing: round resolution must reproduce them exactly for output parity.

/// Number of attributes in a combatant's vector
pub const ATTRIBUTE_COUNT: usize = 10;

/// Minimum value of a single attribute
pub const ATTRIBUTE_MIN: u8 = 1;

/// Maximum value of a single attribute (also the post-increment clamp)
pub const ATTRIBUTE_MAX: u8 = 10;

/// Required sum of the attribute vector
///
/// Forces a tradeoff: an average of 5 per attribute, so a combatant cannot
/// max everything.
pub const ATTRIBUTE_SUM: u16 = 50;

/// Health every combatant starts an engagement with
pub const INITIAL_HEALTH: u8 = 20;

/// Health floor; a hit at this value eliminates instead of decrementing
pub const MIN_HEALTH: u8 = 1;

/// Number of scenarios in a modifier table
pub const SCENARIO_COUNT: usize = 5;

/// Attribute draws map into [0, DRAW_RANGE] via `raw % (DRAW_RANGE + 1)`
pub const DRAW_RANGE: u64 = 10;

/// Raw values delivered per fulfillment: 10 attribute draws + 1 scenario draw
pub const DRAWS_PER_ROUND: usize = 11;

/// Maximum value of a single modifier delta (increment or decrement)
pub const MAX_MODIFIER: u8 = 2;

/// Upper bound on an engagement's countdown delay (7 days in seconds)
pub const MAX_COUNTDOWN_SECS: u64 = 7 * 24 * 60 * 60;

/// Default confirmation depth forwarded to the randomness oracle
pub const DEFAULT_CONFIRMATION_DEPTH: u32 = 3;
