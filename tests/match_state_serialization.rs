use noughts::{ai, EventLog, GameConfig, LifeTracker, MatchController, MatchState, MoveOutcome};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn match_state_roundtrip(seed in any::<u64>(), moves in 0usize..4) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig::default();
        let mut game = MatchController::new(config, LifeTracker::new(5), ()).unwrap();
        for _ in 0..moves {
            let cell = ai::random_empty(game.board(), &mut rng).unwrap();
            if game.on_cell_selected(cell, &mut rng).unwrap() != MoveOutcome::Continue {
                break;
            }
        }

        let state = game.state();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: MatchState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, state);

        let restored = MatchController::from_state(config, decoded, ()).unwrap();
        prop_assert_eq!(restored.state(), state);
        prop_assert_eq!(restored.phase(), game.phase());
    }
}

#[test]
fn event_log_serializes() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = MatchController::new(GameConfig::default(), LifeTracker::new(5), EventLog::new())
        .unwrap();
    game.on_cell_selected(4, &mut rng).unwrap();

    let json = serde_json::to_string(game.observer()).unwrap();
    let decoded: EventLog = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, game.observer());
}

#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{"starting_lives": 3}"#).unwrap();
    assert_eq!(config.starting_lives, 3);
    assert_eq!(config, GameConfig { starting_lives: 3, ..GameConfig::default() });
}
