mod logger;
mod consts;
mod rps;
mod wheel;
mod pool;
mod table;
mod console;

/// # Tasks
/// 1. table: owns the game, applies requests in order
/// 2. console: reads commands, prints events
/// 3. one task per armed phase timer
use std::path::PathBuf;

use clap::Parser;
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::console::Console;
use crate::consts::*;
use crate::pool::QuestionPool;
use crate::table::{Config, DeckSource, Table, TableResult};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Rock-paper-scissors, spin the wheel, answer before the clock runs out", long_about = None)]
struct Args {
    /// JSON question deck, the built-in one when omitted
    #[clap(short, long)]
    deck: Option<PathBuf>,
    #[clap(short, long, default_value_t = ROUND_SECS)]
    round_secs: u16,
    #[clap(long, default_value_t = SPIN_DURATION.as_millis() as u64)]
    spin_ms: u64,
    /// Seed the rng for a reproducible game
    #[clap(long)]
    seed: Option<u64>,
    /// Print every event as a JSON line
    #[clap(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init();
    if let Err(e) = run(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> TableResult<()> {
    let mut config = Config::new();
    config.round_secs = args.round_secs;
    config.spin_duration = Duration::from_millis(args.spin_ms);
    config.seed = args.seed;
    if let Some(path) = args.deck {
        config.deck = DeckSource::File(path);
    }
    config.validate()?;

    let pool = QuestionPool::from_deck(config.deck.load().await?)?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (out_tx, out_rx) = mpsc::channel(CHANNEL_SIZE);
    let mut table = Table::new(config, pool, rng, out_tx);
    let console = Console::new(table.get_tx(), out_rx, args.json);
    table.run().await;
    drop(table);
    console.close().await;
    Ok(())
}
