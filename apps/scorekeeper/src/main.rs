//! Scorekeeper CLI - keeps score for a guessing card game at the table.
//!
//! Reads one command per line from stdin and prints the score grid after
//! every change.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use scorekeeper::cli::{Session, SessionEnd, SessionOptions};
use scorekeeper::{GameConfig, GameStore, Roster, ScheduleSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score sheet for a guessing card game")]
struct Args {
    /// Player name, in seating order (3 to 7, repeat the flag)
    #[arg(short, long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Largest hand size of the up-and-down schedule
    #[arg(long)]
    max_hand: Option<u8>,

    /// Smallest hand size of the up-and-down schedule
    #[arg(long)]
    min_hand: Option<u8>,

    /// Explicit comma-separated schedule, e.g. 5,4,3,4,5
    #[arg(long, value_delimiter = ',')]
    schedule: Vec<u8>,

    /// Expected number of rounds; checked against the schedule
    #[arg(long)]
    total_rounds: Option<usize>,

    /// JSON config file with players and schedule settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the game snapshot as JSON lines instead of the grid
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn schedule_flags(&self) -> ScheduleSettings {
        ScheduleSettings {
            max_hand: self.max_hand,
            min_hand: self.min_hand,
            schedule: (!self.schedule.is_empty()).then(|| self.schedule.clone()),
            total_rounds: self.total_rounds,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Quiet by default; RUST_LOG wins when set.
    let default_level = if args.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::resolve(
        ScheduleSettings::from_env()?,
        args.config.as_deref(),
        args.schedule_flags(),
    )?;

    let names = if args.players.is_empty() {
        config.players.unwrap_or_default()
    } else {
        args.players.clone()
    };
    let roster = Roster::new(names)?;

    let mut store = GameStore::new(roster, config.schedule);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let end = Session::new(&mut store, SessionOptions { json: args.json })
        .run(stdin.lock(), &mut stdout)?;
    stdout.flush()?;

    info!(?end, round_index = store.state().current_round(), "Session ended");
    if end != SessionEnd::Completed {
        eprintln!(
            "Game left unfinished after {} of {} rounds",
            store.state().current_round(),
            store.state().schedule().total_rounds()
        );
    }
    Ok(())
}
