use noughts::{LifeTracker, Side, DEFAULT_STARTING_LIVES};
use proptest::prelude::*;

#[test]
fn test_default_starts_at_five() {
    let lives = LifeTracker::default();
    assert_eq!(DEFAULT_STARTING_LIVES, 5);
    assert_eq!(lives.lives_of(Side::X), 5);
    assert_eq!(lives.lives_of(Side::O), 5);
    assert!(!lives.is_depleted());
}

#[test]
fn test_zero_lives_event_fires_once() {
    let mut lives = LifeTracker::new(2);
    assert!(!lives.report_loss(Side::X));
    assert_eq!(lives.lives_of(Side::X), 1);
    assert!(lives.report_loss(Side::X));
    assert_eq!(lives.lives_of(Side::X), 0);
    assert!(lives.is_depleted());

    // already at zero: clamped, no second event
    assert!(!lives.report_loss(Side::X));
    assert!(!lives.report_loss(Side::X));
    assert_eq!(lives.lives_of(Side::X), 0);
    assert_eq!(lives.lives_of(Side::O), 2);
}

#[test]
fn test_reset_restores_both() {
    let mut lives = LifeTracker::new(3);
    lives.report_loss(Side::X);
    lives.report_loss(Side::O);
    lives.report_loss(Side::O);
    lives.reset();
    assert_eq!(lives.lives_of(Side::X), 3);
    assert_eq!(lives.lives_of(Side::O), 3);
    assert_eq!(lives.starting(), 3);
}

proptest! {
    /// Counters never go below zero and the zero event fires exactly once per side.
    #[test]
    fn losses_clamp_at_zero(starting in 1u32..8, losses in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut lives = LifeTracker::new(starting);
        let mut events = [0u32; 2];
        let mut previous = [starting; 2];
        for x in losses {
            let side = if x { Side::X } else { Side::O };
            let slot = if x { 0 } else { 1 };
            if lives.report_loss(side) {
                events[slot] += 1;
            }
            let now = lives.lives_of(side);
            prop_assert!(now <= previous[slot]);
            prop_assert_eq!(now, previous[slot].saturating_sub(1));
            previous[slot] = now;
        }
        for (slot, side) in [(0, Side::X), (1, Side::O)] {
            let expected = u32::from(lives.lives_of(side) == 0);
            prop_assert_eq!(events[slot], expected);
        }
    }
}
