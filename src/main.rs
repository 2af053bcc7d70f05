//! Terminal Pong runner.
//!
//! Sets up logging, enters the terminal, starts the input sampler thread and
//! runs the game loop until a player quits or the ball gets past a paddle.

use anyhow::{Context, Result};
use clap::Parser;

use tui_pong::cli::{Cli, Size};
use tui_pong::engine::{GameConfig, GameLoop, Outcome};
use tui_pong::input::{InputSampler, Mailbox, TerminalEvents};
use tui_pong::logging;
use tui_pong::term::{HeadlessScreen, TerminalRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = GameConfig::from_env();
    cli.apply(&mut config);

    let _log_guard = logging::init(&config)?;
    tracing::info!(tick_ms = config.tick_ms, "starting");

    let outcome = match cli.headless {
        Some(size) => run_headless(size, &config)?,
        None => run_terminal(&config)?,
    };

    // Terminal is restored by now.
    println!("{outcome}");
    Ok(())
}

fn run_terminal(config: &GameConfig) -> Result<Outcome> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<Outcome> {
    let commands = Mailbox::new();
    InputSampler::new(TerminalEvents, commands.clone())
        .spawn()
        .context("failed to start input sampler")?;

    let mut game = GameLoop::new(term, commands, config.tick())?;
    game.run()
}

fn run_headless(size: Size, config: &GameConfig) -> Result<Outcome> {
    tracing::info!("headless run");
    let screen = HeadlessScreen::new(size.width, size.height);
    let mut game = GameLoop::new(screen, Mailbox::new(), config.tick())?;
    game.run()
}
