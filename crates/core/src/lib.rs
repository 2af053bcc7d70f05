//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input or I/O, making it:
//!
//! - **Deterministic**: The same starting state and command sequence always
//!   produce the same game
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`arena`]: Fixed playfield dimensions, sized once from the terminal
//! - [`paddle`]: Vertical paddles with their collision band
//! - [`ball`]: Unit-speed ball with wall and paddle reflection
//! - [`game_state`]: The complete state owned by the game loop
//!
//! # Game Rules
//!
//! - Paddles sit on the leftmost and rightmost columns and move one row per command
//! - Paddle rows are clamped to `[0, arena height - PADDLE_HEIGHT]`
//! - The ball moves exactly one cell per tick on each axis
//! - The ball reflects off the top and bottom rows and off either paddle
//! - The game ends the moment the ball passes a paddle's column
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{Arena, GameState};
//! use tui_pong_types::Command;
//!
//! let mut game = GameState::new(Arena::new(80, 24));
//! assert_eq!(game.left.y, 9);
//!
//! game.apply_command(Command::MoveLeftPaddleUp);
//! assert_eq!(game.left.y, 8);
//!
//! game.step_ball();
//! assert_eq!((game.ball.x, game.ball.y), (39, 11));
//! assert!(!game.is_game_over());
//! ```

pub mod arena;
pub mod ball;
pub mod game_state;
pub mod paddle;

pub use tui_pong_types as types;

pub use arena::Arena;
pub use ball::Ball;
pub use game_state::{BallStep, GameState};
pub use paddle::Paddle;
