//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then shown on a [`Screen`]:
//! the real terminal ([`TerminalRenderer`]) or an in-memory one
//! ([`HeadlessScreen`]).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure ([`GameView`] never touches I/O)
//! - Repaint the whole frame every tick

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{frame_glyph, GameView};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use screen::{HeadlessScreen, Screen};
