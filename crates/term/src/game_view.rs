//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Ball, GameState, Paddle};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{
    BALL_GLYPH, FRAME_GLYPH_FIRST, FRAME_GLYPH_LAST, FRAME_GLYPH_START, PADDLE_GLYPH,
    PADDLE_HEIGHT,
};

/// Draws the arena one cell per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameView {
    style: CellStyle,
}

impl GameView {
    /// Render `state` into an existing framebuffer.
    ///
    /// The buffer is resized to the arena and fully cleared first. `frame` is
    /// the render count, shown as a one-character counter in the top-left cell.
    pub fn render_into(&self, state: &GameState, frame: u64, fb: &mut FrameBuffer) {
        let arena = state.arena();
        fb.resize(arena.width as u16, arena.height as u16);
        fb.clear(self.style.into_cell(' '));

        fb.put_char(0, 0, frame_glyph(frame), self.style);
        self.draw_paddle(fb, &state.left);
        self.draw_paddle(fb, &state.right);
        self.draw_ball(fb, &state.ball);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, frame: u64) -> FrameBuffer {
        let arena = state.arena();
        let mut fb = FrameBuffer::new(arena.width as u16, arena.height as u16);
        self.render_into(state, frame, &mut fb);
        fb
    }

    fn draw_paddle(&self, fb: &mut FrameBuffer, paddle: &Paddle) {
        fb.fill_rect(paddle.x, paddle.y, 1, PADDLE_HEIGHT, PADDLE_GLYPH, self.style);
    }

    fn draw_ball(&self, fb: &mut FrameBuffer, ball: &Ball) {
        fb.put_char(ball.x, ball.y, BALL_GLYPH, self.style);
    }
}

/// Debug counter glyph for render number `frame`.
///
/// Starts at `'0'` and cycles through printable ASCII.
pub fn frame_glyph(frame: u64) -> char {
    let first = FRAME_GLYPH_FIRST as u64;
    let span = FRAME_GLYPH_LAST as u64 - first + 1;
    let offset = (FRAME_GLYPH_START as u64 - first + frame % span) % span;
    char::from_u32((first + offset) as u32).unwrap_or(FRAME_GLYPH_START)
}
