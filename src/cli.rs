//! Command-line arguments.
//!
//! Flags override the matching environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::engine::GameConfig;

/// Two-player terminal Pong
///
/// Left paddle: w / s. Right paddle: Up / Down. Quit: q, Esc or Ctrl-C.
#[derive(Parser, Debug)]
#[command(name = "tui-pong", version, about, long_about = None)]
pub struct Cli {
    /// Tick period in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tick_ms: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "tui_pong_engine=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Play out a game without a terminal on an arena of this size, e.g. 80x24
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub headless: Option<Size>,
}

impl Cli {
    pub fn apply(&self, config: &mut GameConfig) {
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(path) = &self.log_file {
            config.log_path = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_filter = level.clone();
        }
    }
}

/// Arena size for headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let width: u16 = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
        let height: u16 = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
        if width < 3 || height < 1 {
            return Err(format!("arena {width}x{height} is too small"));
        }
        Ok(Self { width, height })
    }
}

fn parse_size(s: &str) -> Result<Size, String> {
    s.parse()
}
