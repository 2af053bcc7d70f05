//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game loop. It maps
//! `crossterm` key events into [`crate::types::Command`] and runs a background
//! sampler that publishes the most recent command into a single-slot
//! [`Mailbox`]. The game loop reads the mailbox without blocking once per tick.

pub mod mailbox;
pub mod map;
pub mod sampler;

pub use tui_pong_types as types;

pub use mailbox::Mailbox;
pub use map::{is_quit, map_key_event, KeyInput};
pub use sampler::{EventSource, InputSampler, TerminalEvents};
