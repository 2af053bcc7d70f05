//! Playfield dimensions.

use crate::types::PADDLE_HEIGHT;

/// The rectangular region paddles and ball move in.
///
/// Sized once from the terminal at startup; resizing mid-game is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    /// Highest row a paddle's top may occupy.
    ///
    /// Arenas shorter than a paddle pin it to row 0.
    pub fn max_paddle_y(&self) -> i32 {
        (self.height - PADDLE_HEIGHT).max(0)
    }

    /// Last row the ball can occupy before reflecting.
    pub fn bottom_row(&self) -> i32 {
        self.height - 1
    }

    /// Last column of the arena.
    pub fn right_column(&self) -> i32 {
        self.width - 1
    }

    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_terminal_bounds() {
        let arena = Arena::new(80, 24);
        assert_eq!(arena.max_paddle_y(), 18);
        assert_eq!(arena.bottom_row(), 23);
        assert_eq!(arena.right_column(), 79);
        assert_eq!(arena.center(), (40, 12));
    }

    #[test]
    fn tiny_arena_pins_paddles_to_top() {
        let arena = Arena::new(10, 4);
        assert_eq!(arena.max_paddle_y(), 0);
    }
}
