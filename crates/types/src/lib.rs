//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input decoding).
//!
//! # Coordinates
//!
//! The arena is the terminal itself, measured in character cells:
//!
//! - **x** grows to the right, starting at column 0
//! - **y** grows downward, starting at row 0
//! - The arena size is queried once at startup and never changes during a run
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval |
//! | `PADDLE_HEIGHT` | 6 | Rows covered by each paddle |
//! | `PADDLE_GLYPH` | `█` | Paddle cell |
//! | `BALL_GLYPH` | `●` | Ball cell |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Command, Direction, Side, PADDLE_HEIGHT};
//!
//! assert_eq!(
//!     Command::MoveLeftPaddleUp.paddle_move(),
//!     Some((Side::Left, Direction::Up))
//! );
//! assert_eq!(Command::Quit.paddle_move(), None);
//! assert_eq!(PADDLE_HEIGHT, 6);
//! ```

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Paddle height in rows.
pub const PADDLE_HEIGHT: i32 = 6;

/// Paddle cell (U+2588 FULL BLOCK).
pub const PADDLE_GLYPH: char = '\u{2588}';

/// Ball cell (U+25CF BLACK CIRCLE).
pub const BALL_GLYPH: char = '\u{25CF}';

/// First glyph of the per-frame debug counter.
pub const FRAME_GLYPH_START: char = '0';

/// Printable range the debug counter cycles through.
pub const FRAME_GLYPH_FIRST: char = '!';
pub const FRAME_GLYPH_LAST: char = '~';


/// The two players, named by the arena edge their paddle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The other player.
    pub fn opponent(&self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical direction of a paddle move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Row delta for one step in this direction.
    pub fn dy(&self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Symbolic commands decoded from key presses.
///
/// The game loop samples at most one of these per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Up arrow
    MoveRightPaddleUp,
    /// Down arrow
    MoveRightPaddleDown,
    /// `w`
    MoveLeftPaddleUp,
    /// `s`
    MoveLeftPaddleDown,
    /// `q`, Escape or Ctrl-C
    Quit,
}

impl Command {
    /// Split a move command into its paddle and direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pong_types::{Command, Direction, Side};
    ///
    /// assert_eq!(
    ///     Command::MoveRightPaddleDown.paddle_move(),
    ///     Some((Side::Right, Direction::Down))
    /// );
    /// assert_eq!(Command::Quit.paddle_move(), None);
    /// ```
    pub fn paddle_move(&self) -> Option<(Side, Direction)> {
        match self {
            Command::MoveRightPaddleUp => Some((Side::Right, Direction::Up)),
            Command::MoveRightPaddleDown => Some((Side::Right, Direction::Down)),
            Command::MoveLeftPaddleUp => Some((Side::Left, Direction::Up)),
            Command::MoveLeftPaddleDown => Some((Side::Left, Direction::Down)),
            Command::Quit => None,
        }
    }

    /// camelCase name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveRightPaddleUp => "moveRightPaddleUp",
            Command::MoveRightPaddleDown => "moveRightPaddleDown",
            Command::MoveLeftPaddleUp => "moveLeftPaddleUp",
            Command::MoveLeftPaddleDown => "moveLeftPaddleDown",
            Command::Quit => "quit",
        }
    }
}
