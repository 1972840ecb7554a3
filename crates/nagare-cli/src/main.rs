use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, event};

use nagare_cli::config::GameConfig;
use nagare_cli::logging::init_logging;
use nagare_cli::session::{Session, SessionOutcome};
use nagare_core::game::GameEngine;

/// Console front end for the nagare card game.
#[derive(Debug, Parser)]
#[command(
    name = "nagare",
    author,
    version,
    about = "Play the field-matching card game against scripted opponents"
)]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the RNG seed used to shuffle and refresh.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the human player's name.
    #[arg(long, value_name = "NAME")]
    human: Option<String>,

    /// Replace the opponent list; repeat once per opponent.
    #[arg(long = "opponent", value_name = "NAME")]
    opponents: Vec<String>,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write logs as JSON lines to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print game events as JSON lines instead of sentences.
    #[arg(long)]
    json_events: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(human) = cli.human {
        config.human = human;
    }

    if !cli.opponents.is_empty() {
        config.opponents = cli.opponents;
    }

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;

    let roster = config.roster();
    let engine = match config.seed {
        Some(seed) => GameEngine::with_seed(roster, seed)?,
        None => GameEngine::new(roster)?,
    };
    event!(
        target: "nagare::cli",
        Level::INFO,
        seed = engine.seed(),
        players = engine.players().len(),
        "game started"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(engine, stdin.lock(), stdout.lock()).json_events(cli.json_events);

    match session.run()? {
        SessionOutcome::Finished(ranking) => {
            event!(
                target: "nagare::cli",
                Level::INFO,
                players = ranking.len(),
                "game finished"
            );
        }
        SessionOutcome::Quit => {
            event!(
                target: "nagare::cli",
                Level::INFO,
                "left before the game ended"
            );
        }
    }

    Ok(())
}
