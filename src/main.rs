#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use noughts::{
    init_logging, parse_command, print_help, read_line, render_board, CliCommand, GameConfig,
    LifeTracker, MatchController, Mode, MoveOutcome, Side, TerminalObserver,
    DEFAULT_OPPONENT_DELAY_MS, DEFAULT_STARTING_LIVES,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ModeArg {
    /// Play against the scripted opponent.
    Ai,
    /// Two people sharing the keyboard.
    Human,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum SideArg {
    X,
    O,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = ModeArg::Ai)]
        mode: ModeArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_STARTING_LIVES)]
        lives: u32,
        #[arg(long, value_enum, default_value_t = SideArg::O)]
        first: SideArg,
        #[arg(long, default_value_t = DEFAULT_OPPONENT_DELAY_MS)]
        delay_ms: u64,
        #[arg(long, help = "Leave the played board in place after a win")]
        keep_board: bool,
    },
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            seed,
            lives,
            first,
            delay_ms,
            keep_board,
        } => {
            let config = GameConfig {
                starting_lives: lives,
                starting_turn: match first {
                    SideArg::X => Side::X,
                    SideArg::O => Side::O,
                },
                opponent_delay_ms: delay_ms,
                fill_board_on_win: !keep_board,
                mode: match mode {
                    ModeArg::Ai => Mode::HumanVsOpponent,
                    ModeArg::Human => Mode::HumanVsHuman,
                },
            };
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            run_terminal(config, rng).await?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_terminal(config: GameConfig, mut rng: SmallRng) -> anyhow::Result<()> {
    let lives = LifeTracker::new(config.starting_lives);
    let mut game = MatchController::new(config, lives, TerminalObserver::new())
        .map_err(|e| anyhow::anyhow!(e))?;
    print_help();

    loop {
        if game.observer_mut().take_board_dirty() {
            println!("\n{}", render_board(game.board()));
        }
        println!(
            "Current turn: {}   X lives = {}   O lives = {}   [{:?}]",
            game.turn(),
            game.lives().lives_of(Side::X),
            game.lives().lives_of(Side::O),
            game.mode()
        );
        let Some(line) = read_line("> ")? else { break };
        let Some(command) = parse_command(&line) else {
            println!("Invalid input, type h for help");
            continue;
        };

        match command {
            CliCommand::Cell(index) => match game.on_cell_selected(index, &mut rng) {
                Ok(outcome) => {
                    if game.mode() == Mode::HumanVsOpponent && outcome == MoveOutcome::Continue {
                        let pause = game.opponent_delay(&mut rng);
                        tokio::time::sleep(pause).await;
                    }
                }
                Err(e) if e.is_invalid_move() => println!("Can't play there: {}", e),
                Err(e) => return Err(anyhow::anyhow!(e)),
            },
            CliCommand::Reset => game.reset(),
            CliCommand::ToggleMode => {
                let mode = game.on_mode_toggled();
                println!("Switched to {:?}", mode);
            }
            CliCommand::Help => print_help(),
            CliCommand::Quit => break,
        }
    }
    Ok(())
}
