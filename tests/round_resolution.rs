//! Round-resolution parity tests
//!
//! These pin down the combat algorithm's observable behavior: clamping
//! order, strict draw comparison, reverse evaluation order, swap-remove
//! elimination, and the early survivor cut-off.

use spiral_arena::{
    Arena, Attributes, BackerId, CombatantId, EngagementId, EngagementState, InMemoryTreasury,
    LocalOracle, ModifierTable, RawDraws,
};

fn new_arena() -> (BackerId, Arena<LocalOracle, InMemoryTreasury>) {
    let owner = BackerId::new();
    let arena = Arena::new(
        owner,
        ModifierTable::standard(),
        LocalOracle::from_seed(11),
        InMemoryTreasury::new(),
    );
    (owner, arena)
}

fn started_pair(
    arena: &mut Arena<LocalOracle, InMemoryTreasury>,
    owner: BackerId,
    a_attrs: Attributes,
    b_attrs: Attributes,
) -> (CombatantId, CombatantId) {
    arena
        .create_engagement(owner, EngagementId(1), 2, 0, 3_600)
        .unwrap();
    let backer_a = BackerId::new();
    let backer_b = BackerId::new();
    let a = arena.register_combatant(backer_a, a_attrs).unwrap();
    let b = arena.register_combatant(backer_b, b_attrs).unwrap();
    arena.join(backer_a, a, EngagementId(1), 0, 1_000).unwrap();
    arena.join(backer_b, b, EngagementId(1), 0, 1_001).unwrap();
    arena.start(owner, EngagementId(1)).unwrap();
    (a, b)
}

fn fulfill(arena: &mut Arena<LocalOracle, InMemoryTreasury>, raw: RawDraws) {
    let request = arena.pending_request(EngagementId(1)).unwrap();
    arena.on_draws_ready(request, raw).unwrap();
}

/// A maximal draw against an adjusted attribute of 0 costs exactly one
/// health point.
#[test]
fn test_maximal_draw_against_weakest_attribute() {
    let (owner, mut arena) = new_arena();
    // b's weakest attribute is slot 0 with value 1; under Ambush
    // (scenario 4) slot 0 is decremented by 2, so adjusted = 0.
    let a_attrs = [5; 10];
    let b_attrs = [1, 9, 5, 5, 5, 5, 5, 5, 5, 5];
    let (a, b) = started_pair(&mut arena, owner, a_attrs, b_attrs);

    // Only slot 0 draws high; everything else draws 0 and cannot hit.
    let mut raw = [0u64; 11];
    raw[0] = 10;
    raw[10] = 4; // Ambush

    fulfill(&mut arena, raw);

    // Ambush lowers a's slot 0 (5 - 2 = 3): 10 > 3 hits a as well; both
    // drop exactly one point from the single qualifying draw.
    assert_eq!(arena.combatant(a).unwrap().health, 19);
    assert_eq!(arena.combatant(b).unwrap().health, 19);
    assert_eq!(arena.engagement(EngagementId(1)).unwrap().round, 2);
}

/// All-zero draws can never exceed an adjusted attribute: a full round
/// passes with no damage and no elimination.
#[test]
fn test_zero_draws_are_harmless() {
    let (owner, mut arena) = new_arena();
    let (a, b) = started_pair(&mut arena, owner, [5; 10], [4, 6, 5, 5, 5, 5, 5, 5, 5, 5]);

    let mut raw = [0u64; 11];
    raw[10] = 0;
    fulfill(&mut arena, raw);

    assert_eq!(arena.combatant(a).unwrap().health, 20);
    assert_eq!(arena.combatant(b).unwrap().health, 20);
    assert_eq!(
        arena.engagement(EngagementId(1)).unwrap().state,
        EngagementState::InProgress
    );
}

/// Increment clamps at 10 before the decrement applies: under Gale
/// (alternating +1/-1), a 10-valued even slot stays 10 and a draw of 10
/// cannot hit it.
#[test]
fn test_increment_clamps_before_decrement() {
    let (owner, mut arena) = new_arena();
    // Slot 0 maxed; slots balanced to keep the sum at 50
    let a_attrs = [10, 1, 5, 5, 5, 5, 5, 5, 5, 4];
    let b_attrs = [5; 10];
    let (a, b) = started_pair(&mut arena, owner, a_attrs, b_attrs);

    // Gale is scenario 2: +1 on even slots, -1 on odd slots. Only slot 0
    // draws; a's slot 0 adjusts to min(10 + 1, 10) = 10, so 10 > 10 misses.
    let mut raw = [0u64; 11];
    raw[0] = 10;
    raw[10] = 2;
    fulfill(&mut arena, raw);

    assert_eq!(arena.combatant(a).unwrap().health, 20);
    // b's slot 0 adjusts to 6; 10 > 6 hits
    assert_eq!(arena.combatant(b).unwrap().health, 19);
}

/// Reverse evaluation order: when the round ends at one roster entry, the
/// earlier joiner has not been evaluated and takes no damage.
#[test]
fn test_survivor_is_untouched_after_cutoff() {
    let (owner, mut arena) = new_arena();
    let (a, b) = started_pair(&mut arena, owner, [5; 10], [4, 6, 5, 5, 5, 5, 5, 5, 5, 5]);

    // Eclipse rounds deal 10 damage to each evaluated combatant. Run one
    // full round (both at 10), then a second: b is evaluated first, falls,
    // and a survives round 2 without being evaluated.
    let mut raw = [10u64; 11];
    raw[10] = 3;
    fulfill(&mut arena, raw);
    assert_eq!(arena.combatant(a).unwrap().health, 10);
    assert_eq!(arena.combatant(b).unwrap().health, 10);

    fulfill(&mut arena, raw);
    let engagement = arena.engagement(EngagementId(1)).unwrap();
    assert_eq!(engagement.state, EngagementState::Completed);
    assert_eq!(engagement.survivor, Some(a));
    // b was evaluated first in round 2 and fell; a was never evaluated.
    // Both records are reset once they leave the engagement.
    assert_eq!(arena.combatant(a).unwrap().health, 20);
    assert_eq!(arena.combatant(b).unwrap().health, 20);
}

/// The scenario selector wraps modulo 5
#[test]
fn test_scenario_selector_wraps() {
    let (owner, mut arena) = new_arena();
    let (a, b) = started_pair(&mut arena, owner, [5; 10], [4, 6, 5, 5, 5, 5, 5, 5, 5, 5]);

    // Selector 8 % 5 = 3 (Eclipse): all-10 draws deal full damage
    let mut raw = [10u64; 11];
    raw[10] = 8;
    fulfill(&mut arena, raw);
    assert_eq!(arena.combatant(a).unwrap().health, 10);
    assert_eq!(arena.combatant(b).unwrap().health, 10);
}
