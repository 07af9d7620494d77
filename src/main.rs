//! Terminal match-3 runner (default binary).
//!
//! Input comes from crossterm and frames go through the framebuffer renderer.
//! Set `MATCH3_LOG_PATH` to write tracing output to a file (the terminal is
//! in raw mode, so nothing is logged to it); `MATCH3_LOG` sets the filter.

use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_match3::core::config::ENV_SEED;
use tui_match3::core::{BoardEngine, GameConfig, GameSnapshot, MoveOutcome};
use tui_match3::input::{handle_key_event, should_quit, Cursor};
use tui_match3::term::{FrameBuffer, GameView, PlayerView, TerminalRenderer, Viewport};
use tui_match3::types::GameAction;

const ENV_LOG: &str = "MATCH3_LOG";
const ENV_LOG_PATH: &str = "MATCH3_LOG_PATH";

fn main() -> Result<()> {
    init_tracing()?;

    let mut config = GameConfig::from_env();
    let fixed_seed = std::env::var(ENV_SEED).is_ok();
    if !fixed_seed {
        config.seed = time_seed();
    }
    config.validate().context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, fixed_seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var(ENV_LOG_PATH) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    let filter = std::env::var(ENV_LOG).unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut config: GameConfig, fixed_seed: bool) -> Result<()> {
    let mut engine = BoardEngine::with_config(config.clone())?;
    let view = GameView::default();
    let mut cursor = Cursor::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut show_hint = false;
    let mut status = String::from("select a tile");

    loop {
        engine.snapshot_into(&mut snap)?;
        let player = PlayerView {
            cursor: Some(cursor.pos()),
            selected: cursor.selected(),
            show_hint,
            status: &status,
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &player, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };
        if should_quit(key) {
            info!(score = engine.score(), "quit");
            return Ok(());
        }
        let Some(action) = handle_key_event(key) else {
            continue;
        };

        match action {
            GameAction::Hint => {
                show_hint = !show_hint;
                status = match (show_hint, snap.hint) {
                    (false, _) => String::new(),
                    (true, Some(h)) => format!(
                        "try ({},{})-({},{})",
                        h.a.row, h.a.col, h.b.row, h.b.col
                    ),
                    (true, None) => "no moves left".to_string(),
                };
            }
            GameAction::Restart => {
                if !fixed_seed {
                    config.seed = time_seed();
                }
                engine = BoardEngine::with_config(config.clone())?;
                cursor = Cursor::default();
                show_hint = false;
                status = format!("new game, seed {}", config.seed);
            }
            _ => {
                if snap.game_over {
                    continue;
                }
                let Some(swap) = cursor.apply(action) else {
                    continue;
                };
                show_hint = false;
                status = match engine.apply_swap(swap)? {
                    MoveOutcome::Accepted(report) => {
                        format!("+{} ({} passes)", report.cascade.points, report.cascade.passes)
                    }
                    MoveOutcome::Rejected(reason) => {
                        debug!(?swap, reason = reason.as_str(), "swap refused");
                        reason.as_str().to_string()
                    }
                };
            }
        }
    }
}
