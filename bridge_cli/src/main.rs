mod recording;

use std::io::BufRead;
use std::path::PathBuf;

use bridge::{
    parse_bridge_size, parse_move, parse_replay, BridgeGame, InvalidInput, RandomLaneSource,
    ReplayCommand, MAX_BRIDGE_LEN, MIN_BRIDGE_LEN,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::recording::Recorder;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record finished sessions as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

/// Reads lines from stdin until one passes validation.
///
/// Every prompt in the game goes through this single function, so invalid
/// tokens are handled uniformly: report the reason, reissue the same prompt.
struct Prompter {
    stdin: std::io::StdinLock<'static>,
    // A re-usable buffer, emptied before each read.
    buf: String,
}

impl Prompter {
    fn new() -> Self {
        Self {
            stdin: std::io::stdin().lock(),
            buf: String::new(),
        }
    }

    fn read_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InvalidInput>,
    ) -> anyhow::Result<T> {
        loop {
            println!("{prompt}");
            self.buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = self.stdin.read_line(&mut self.buf)?;
            if num_bytes_read == 0 {
                // EOF before the game finished.
                anyhow::bail!("Input ended before the game finished");
            }
            match parse(self.buf.trim_end()) {
                Ok(value) => return Ok(value),
                Err(reason) => println!("[ERROR] {reason}"),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut source = RandomLaneSource::new(StdRng::seed_from_u64(seed));

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut prompter = Prompter::new();

    println!("Let's play the bridge crossing game.\n");
    let len = prompter.read_valid(
        &format!("Enter the bridge length ({MIN_BRIDGE_LEN} to {MAX_BRIDGE_LEN})."),
        parse_bridge_size,
    )?;
    let mut game = BridgeGame::new(len, &mut source);
    debug!(len, "Bridge generated");

    loop {
        let guess = prompter.read_valid("Choose the lane to step on (U or D).", parse_move)?;
        game.record_move(guess);
        debug!(%guess, position = game.position());
        println!("{}\n", game.current_map());

        if !game.is_over() {
            continue;
        }
        if game.is_success() {
            break;
        }
        match prompter.read_valid("Retry the crossing or quit (R or Q).", parse_replay)? {
            ReplayCommand::Retry => {
                if let Some(rec) = &mut recorder {
                    rec.store_attempt(game.moves(), false);
                }
                game.reset_for_replay();
                debug!(attempt = game.attempts(), "Crossing restarted");
            }
            ReplayCommand::Quit => break,
        }
    }

    println!("{}", game.format_result());

    if let Some(rec) = &mut recorder {
        rec.store_attempt(game.moves(), game.is_success());
        rec.write_session_recording(game.bridge())?;
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
