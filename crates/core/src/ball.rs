//! Ball physics.
//!
//! One Euler step per tick with unit velocity on both axes. Reflection only
//! flips the velocity; the position that triggered it is kept, so the ball
//! moves away on the next tick. Collision is a proximity check on the contact
//! column, which is only sound because the ball never moves more than one
//! cell per tick.

use crate::arena::Arena;
use crate::paddle::Paddle;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    /// Always -1 or +1.
    vel_x: i32,
    /// Always -1 or +1.
    vel_y: i32,
}

/// Collapse a velocity component to a unit step: negative means -1, anything
/// else +1.
fn unit(v: i32) -> i32 {
    if v < 0 {
        -1
    } else {
        1
    }
}

impl Ball {
    /// Velocity components are reduced to their sign, so the ball always
    /// moves exactly one cell per axis per tick.
    pub fn new(x: i32, y: i32, vel_x: i32, vel_y: i32) -> Self {
        Self {
            x,
            y,
            vel_x: unit(vel_x),
            vel_y: unit(vel_y),
        }
    }

    pub fn vel_x(&self) -> i32 {
        self.vel_x
    }

    pub fn vel_y(&self) -> i32 {
        self.vel_y
    }

    /// Ball at the arena center moving up and to the left.
    pub fn spawn(arena: Arena) -> Self {
        let (x, y) = arena.center();
        Self::new(x, y, -1, -1)
    }

    pub fn advance(&mut self) {
        self.x += self.vel_x;
        self.y += self.vel_y;
    }

    /// Flip vertical velocity on or past the top and bottom rows.
    pub fn bounce_off_walls(&mut self, arena: Arena) -> bool {
        if self.y <= 0 || self.y >= arena.bottom_row() {
            self.vel_y = -self.vel_y;
            return true;
        }
        false
    }

    /// Flip horizontal velocity when on the paddle's contact column and
    /// inside its hit band.
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle, side: Side) -> bool {
        if self.x == paddle.contact_column(side) && paddle.hit_band().contains(&self.y) {
            self.vel_x = -self.vel_x;
            return true;
        }
        false
    }
}
