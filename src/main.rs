//! Terminal Mahjong runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term` crate.
//! Logs go to a file, never to the terminal being drawn on.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_mahjong::app::{App, Flow};
use tui_mahjong::config::{AppConfig, Cli};
use tui_mahjong::core::GameSession;
use tui_mahjong::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;
    init_logging(config.log_path.as_deref())?;

    let session = GameSession::new_game(config.game_number).context("dealing the first game")?;
    info!(game_number = session.game_number(), "starting");

    if config.print_deal {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(session));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.session().snapshot(), app.view_state(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key, Instant::now())? == Flow::Quit {
                        info!(game_number = app.session().game_number(), "quit");
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}
