use noughts::{
    ai, init_logging, GameConfig, LifeTracker, MatchController, MatchTally, Mode, MoveOutcome,
    Phase, Side,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <matches>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let matches: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig {
        opponent_delay_ms: 0,
        mode: Mode::HumanVsOpponent,
        ..GameConfig::default()
    };
    let human = config.starting_turn;
    let mut game = MatchController::new(
        config,
        LifeTracker::new(config.starting_lives),
        MatchTally::new(),
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    for _ in 0..matches {
        while game.phase() == Phase::AwaitingHumanMove {
            // stand-in for a person: any empty cell
            let cell = ai::random_empty(game.board(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            if game.on_cell_selected(cell, &mut rng).map_err(|e| anyhow::anyhow!(e))?
                != MoveOutcome::Continue
            {
                break;
            }
        }
        game.reset();
    }

    let tally = game.observer();

    let result = json!({
        "seed": seed,
        "matches": matches,
        "human": human,
        "wins": {"x": tally.wins(Side::X), "o": tally.wins(Side::O)},
        "draws": tally.draws(),
        "game_overs": tally.game_overs(),
        "lives": {
            "x": game.lives().lives_of(Side::X),
            "o": game.lives().lives_of(Side::O),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
