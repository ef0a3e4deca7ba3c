//! Combat resolution engine

pub mod round;

pub use round::{resolve_round, RoundOutcome, RoundReport};
