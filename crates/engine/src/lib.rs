//! Game loop module - drives the simulation at a fixed tick rate
//!
//! Each tick renders the current state, sleeps for the tick period, samples
//! the input mailbox without blocking, applies the sampled command, steps the
//! ball and checks for game over:
//!
//! ```text
//! InputSampler -> Mailbox -> GameLoop -> GameState -> GameView -> Screen
//! ```
//!
//! The loop owns all mutable game state. The input sampler runs on its own
//! thread and only ever touches the mailbox.
//!
//! # Environment Variables
//!
//! - `PONG_TICK_MS`: Tick period in milliseconds (default: 50)
//! - `PONG_LOG_PATH`: Write logs to this file (default: logging off)
//! - `PONG_LOG`: Log filter when `RUST_LOG` is unset (default: "info")
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tui_pong_engine::{GameLoop, Outcome};
//! use tui_pong_input::Mailbox;
//! use tui_pong_term::HeadlessScreen;
//!
//! let screen = HeadlessScreen::new(80, 24);
//! let mut game = GameLoop::new(screen, Mailbox::new(), Duration::ZERO).unwrap();
//! let outcome = game.run().unwrap();
//! assert!(matches!(outcome, Outcome::BallOut(_)));
//! ```

pub mod config;
pub mod game_loop;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use config::GameConfig;
pub use game_loop::{GameLoop, LoopState, Outcome};
