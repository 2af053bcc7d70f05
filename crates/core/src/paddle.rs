//! Paddles.

use std::ops::RangeInclusive;

use crate::arena::Arena;
use crate::types::{Direction, Side, PADDLE_HEIGHT};

/// A one-column, `PADDLE_HEIGHT`-row bar.
///
/// `x` never changes after construction. `y` is the top row; the game state
/// keeps it within `[0, arena.max_paddle_y()]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Paddle on `side` of `arena`, vertically centered.
    pub fn spawn(side: Side, arena: Arena) -> Self {
        let x = match side {
            Side::Left => 0,
            Side::Right => arena.right_column(),
        };
        let y = (arena.height / 2 - PADDLE_HEIGHT / 2).clamp(0, arena.max_paddle_y());
        Self { x, y }
    }

    /// Move one row in `dir` unless that would leave `[0, max_y]`.
    ///
    /// Returns whether the paddle moved.
    pub fn nudge(&mut self, dir: Direction, max_y: i32) -> bool {
        let next = self.y + dir.dy();
        if next < 0 || next > max_y {
            return false;
        }
        self.y = next;
        true
    }

    /// Rows where the ball is deflected: one extra row above and below the bar.
    pub fn hit_band(&self) -> RangeInclusive<i32> {
        self.y - 1..=self.y + PADDLE_HEIGHT
    }

    /// Column the ball must be on to be deflected by a paddle on `side`.
    pub fn contact_column(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.x + 1,
            Side::Right => self.x - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_centered_on_the_edges() {
        let arena = Arena::new(80, 24);
        assert_eq!(Paddle::spawn(Side::Left, arena), Paddle::new(0, 9));
        assert_eq!(Paddle::spawn(Side::Right, arena), Paddle::new(79, 9));
    }

    #[test]
    fn nudge_stops_at_bounds() {
        let mut p = Paddle::new(0, 0);
        assert!(!p.nudge(Direction::Up, 18));
        assert_eq!(p.y, 0);

        p.y = 18;
        assert!(!p.nudge(Direction::Down, 18));
        assert_eq!(p.y, 18);

        assert!(p.nudge(Direction::Up, 18));
        assert_eq!(p.y, 17);
    }

    #[test]
    fn hit_band_is_two_rows_taller_than_the_bar() {
        let p = Paddle::new(0, 10);
        assert_eq!(p.hit_band(), 9..=16);
        assert_eq!(p.hit_band().count() as i32, PADDLE_HEIGHT + 2);
    }

    #[test]
    fn contact_column_is_one_cell_inward() {
        assert_eq!(Paddle::new(0, 0).contact_column(Side::Left), 1);
        assert_eq!(Paddle::new(79, 0).contact_column(Side::Right), 78);
    }
}
