//! sumtap - tap tiles until they add up to the target before time runs out.

use std::io::{self, BufRead};
use std::thread;

use clap::Parser;
use sumtap::presentation::json::{write_line, ServerMsg};
use sumtap::presentation::{InputMode, JsonPresenter, TextPresenter};
use sumtap::services::game_loop::{run_game, GameEvent, InputEvent, PlayerCommand, Presenter};
use sumtap::telemetry;
use sumtap::{AppError, ConfigOverrides, GameConfig};
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Parser)]
#[command(name = "sumtap")]
#[command(about = "Pick numbers that add up to the target before the clock runs out")]
struct Args {
    /// Tiles per round (>= 3) [env: SUMTAP_CANDIDATE_COUNT, default 6]
    #[arg(short = 'n', long)]
    candidates: Option<usize>,

    /// Seconds per round [env: SUMTAP_INITIAL_SECONDS, default 10]
    #[arg(short, long)]
    seconds: Option<u32>,

    /// Milliseconds per clock tick [env: SUMTAP_TICK_MS, default 1000]
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Session seed for reproducible rounds [env: SUMTAP_SEED]
    #[arg(long)]
    seed: Option<u64>,

    /// Speak JSON lines on stdin/stdout instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (stderr)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    telemetry::init_tracing(filter);

    let json = args.json;
    if let Err(e) = run(args).await {
        // A JSON client learns why the session ended before stdout closes
        if json {
            let _ = write_line(&mut io::stdout(), &ServerMsg::fatal(&e));
        }
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = GameConfig::from_env()?.with_overrides(ConfigOverrides {
        candidate_count: args.candidates,
        initial_seconds: args.seconds,
        tick_ms: args.tick_ms,
        seed: args.seed,
    })?;
    debug!(?config, "Configuration resolved");

    let mode = if args.json {
        InputMode::Json
    } else {
        InputMode::Text
    };

    let (events_tx, events_rx) = mpsc::unbounded_channel::<GameEvent>();
    spawn_input_reader(mode, events_tx.clone());

    let stdout = io::stdout();
    let mut presenter: Box<dyn Presenter> = match mode {
        InputMode::Text => Box::new(TextPresenter::new(stdout.lock())),
        InputMode::Json => Box::new(JsonPresenter::new(stdout.lock())),
    };

    run_game(config, events_tx, events_rx, presenter.as_mut()).await?;
    Ok(())
}

/// Read stdin on a plain thread so a pending read never holds up exit.
fn spawn_input_reader(mode: InputMode, events: mpsc::UnboundedSender<GameEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let Some(parsed) = mode.parse_line(&line) else {
                continue;
            };
            let event = match parsed {
                Ok(command) => GameEvent::from(command),
                Err(message) => GameEvent::Input(InputEvent::Malformed(message)),
            };
            if events.send(event).is_err() {
                return;
            }
        }
        // EOF ends the session
        let _ = events.send(GameEvent::from(PlayerCommand::Quit));
    });
}
