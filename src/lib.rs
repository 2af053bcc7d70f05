//! Terminal Pong (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pong::{core,engine,input,term,types}`
//! and hosts the binary's command-line and logging setup.

pub use tui_pong_core as core;
pub use tui_pong_engine as engine;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub mod cli;
pub mod logging;
