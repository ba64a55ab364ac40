//! arena — run one `DuhBot` against a board snapshot loaded from JSON.
//!
//! ```text
//! RUST_LOG=gb_logic=debug cargo run -p arena -- \
//!     --board demos/arena/data/board.json --config demos/arena/data/logic.json
//! ```
//!
//! Without `--board` the embedded 10×10 sample board is used.  Opponents stay
//! where they are; only the controlled bot moves.

mod arena;


use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gb_board::{Board, validate_board};
use gb_core::{BotId, BotRng};
use gb_logic::{DuhBot, LogicConfig};

use arena::Arena;

const SAMPLE_BOARD: &str = include_str!("../data/board.json");

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Run a DuhBot on a grid board snapshot")]
struct Args {
    /// Board snapshot (JSON).  Defaults to the embedded sample board.
    #[arg(long)]
    board: Option<PathBuf>,

    /// LogicConfig overrides (JSON).  Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Id of the bot to control.  Defaults to the first bot on the board.
    #[arg(long)]
    bot: Option<u32>,

    /// Maximum ticks to play.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Match milliseconds consumed per tick.
    #[arg(long, default_value_t = 1_000)]
    tick_ms: u64,

    /// RNG seed for the random-walk fallback.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let board: Board = match &args.board {
        Some(path) => read_json(path)?,
        None => serde_json::from_str(SAMPLE_BOARD).context("parsing embedded sample board")?,
    };
    validate_board(&board).context("invalid board")?;

    let config: LogicConfig = match &args.config {
        Some(path) => read_json(path)?,
        None => LogicConfig::default(),
    };
    let mut logic = DuhBot::with_config(config).context("invalid logic config")?;

    let me = match args.bot {
        Some(id) => BotId(id),
        None => board.bots.first().map(|b| b.id).context("board has no bots")?,
    };
    board.require_bot(me)?;

    info!(
        width    = board.width,
        height   = board.height,
        bots     = board.bots.len(),
        diamonds = board.diamonds.len(),
        bot      = %me,
        seed     = args.seed,
        "starting arena"
    );

    let mut rng = BotRng::new(args.seed, me);
    let mut arena = Arena::new(board, me, args.tick_ms);
    let summary = arena.run(&mut logic, &mut rng, args.ticks)?;

    println!("=== arena — rust_gridbot ===");
    println!("Ticks played:   {}", summary.ticks);
    println!("Score banked:   {}", summary.score);
    println!("Still carrying: {}", summary.carried);
    println!("Teleports:      {}", summary.teleports);
    println!("Diamonds left:  {}", summary.diamonds_left);
    println!("Final status:   {}", logic.status());
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}
