//! Terminal snake runner (default binary).
//!
//! Owns the game state and drives it: polls keys without blocking, advances
//! the core once per tick, and redraws the terminal from a snapshot.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameConfig, GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, InputCommand};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{DEFAULT_COLS, DEFAULT_INITIAL_LENGTH, DEFAULT_ROWS, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-snake", about = "Snake in the terminal")]
struct Args {
    /// Playfield height
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u8,

    /// Playfield width
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u8,

    /// Body length at start
    #[arg(long, default_value_t = DEFAULT_INITIAL_LENGTH)]
    length: u8,

    /// No food; score counts ticks survived
    #[arg(long)]
    no_food: bool,

    /// RNG seed for food placement (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds per tick
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,

    /// Draw with plain ASCII glyphs
    #[arg(long)]
    ascii: bool,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        if self.no_food {
            GameConfig::survival(self.rows, self.cols, self.length)
        } else {
            GameConfig::new(self.rows, self.cols, self.length)
        }
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    // Reject a bad configuration before touching the terminal.
    let game = GameState::new(args.game_config(), args.seed()).context("starting game")?;
    info!(seed = game.seed(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    // stdout/stderr belong to the alternate screen; without a file, stay silent.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, args: &Args, mut game: GameState) -> Result<()> {
    let view = if args.ascii {
        GameView::default().with_glyphs('#', '*')
    } else {
        GameView::default()
    };
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(args.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                    Some(InputCommand::Steer(dir)) => {
                        game.set_pending_direction(dir);
                    }
                    Some(InputCommand::NewGame) => {
                        let seed = game.next_seed();
                        game = GameState::new(*game.config(), seed)?;
                        last_tick = Instant::now();
                        info!(seed, "new game");
                    }
                    Some(InputCommand::Quit) => {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    None => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.advance();
        }
    }
}
