use noughts::{
    ai, evaluate, GameConfig, LifeTracker, Mark, MatchController, Mode, MoveOutcome, Phase, Side,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Play one match with uniformly random human moves. Returns the outcome and
/// the number of human moves made.
fn random_match(game: &mut MatchController, rng: &mut SmallRng) -> (MoveOutcome, usize) {
    let mut moves = 0;
    loop {
        let cell = ai::random_empty(game.board(), rng).unwrap();
        moves += 1;
        let outcome = game.on_cell_selected(cell, rng).unwrap();
        if outcome != MoveOutcome::Continue {
            return (outcome, moves);
        }
        assert!(moves < 9, "match did not finish");
    }
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::HumanVsHuman), Just(Mode::HumanVsOpponent)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every match ends in Idle within nine marks, and only a win costs a life.
    #[test]
    fn random_matches_terminate(seed in any::<u64>(), mode in mode_strategy(), fill in any::<bool>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig { mode, fill_board_on_win: fill, ..GameConfig::default() };
        let mut game = MatchController::new(config, LifeTracker::new(config.starting_lives), ()).unwrap();

        let (outcome, moves) = random_match(&mut game, &mut rng);
        prop_assert!(moves <= 9);
        prop_assert_eq!(game.phase(), Phase::Idle);

        let lost = |side: Side| config.starting_lives - game.lives().lives_of(side);
        match outcome {
            MoveOutcome::Won(win) => {
                prop_assert_eq!(lost(win.side.opponent()), 1);
                prop_assert_eq!(lost(win.side), 0);
                prop_assert_eq!(evaluate(game.board()).map(|w| w.side), Some(win.side));
                if fill {
                    prop_assert_eq!(game.board().cells(), [Mark::from(win.side); 9]);
                }
            }
            MoveOutcome::Drawn => {
                prop_assert!(game.board().is_full());
                prop_assert_eq!(evaluate(game.board()), None);
                prop_assert_eq!(lost(Side::X) + lost(Side::O), 0);
            }
            MoveOutcome::Continue => prop_assert!(false, "match left running"),
        }
    }

    /// Marks alternate: the starting side never falls behind or gets two ahead.
    #[test]
    fn marks_alternate(seed in any::<u64>(), mode in mode_strategy()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig { mode, fill_board_on_win: false, ..GameConfig::default() };
        let mut game = MatchController::new(config, LifeTracker::new(5), ()).unwrap();

        random_match(&mut game, &mut rng);
        let first = game.board().occupancy(config.starting_turn).count_ones();
        let second = game.board().occupancy(config.starting_turn.opponent()).count_ones();
        prop_assert!(first == second || first == second + 1);
    }

    /// Lives never increase between resets unless a side ran out.
    #[test]
    fn lives_only_restore_after_depletion(seed in any::<u64>(), matches in 1usize..20) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig { starting_lives: 3, ..GameConfig::default() };
        let mut game = MatchController::new(config, LifeTracker::new(3), ()).unwrap();

        for _ in 0..matches {
            random_match(&mut game, &mut rng);
            let before = *game.lives();
            game.reset();
            let after = *game.lives();
            if before.is_depleted() {
                prop_assert_eq!(after, LifeTracker::new(3));
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
