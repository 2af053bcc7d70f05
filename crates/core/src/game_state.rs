//! Game state module - the two paddles and the ball
//!
//! Owned by the game loop and mutated in place once per tick. There is
//! exactly one of each entity for the lifetime of the state.

use crate::arena::Arena;
use crate::ball::Ball;
use crate::paddle::Paddle;
use crate::types::{Command, Side};

/// What happened during one ball step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallStep {
    /// The ball reflected off the top or bottom row.
    pub wall: bool,
    /// The ball reflected off this side's paddle.
    pub paddle: Option<Side>,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    arena: Arena,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Paddles centered on the left and right edges, ball at the center
    /// heading up-left.
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            left: Paddle::spawn(Side::Left, arena),
            right: Paddle::spawn(Side::Right, arena),
            ball: Ball::spawn(arena),
        }
    }

    /// Same as [`GameState::new`] with a chosen initial ball direction.
    pub fn with_ball_velocity(arena: Arena, vel_x: i32, vel_y: i32) -> Self {
        let mut state = Self::new(arena);
        state.ball = Ball::new(state.ball.x, state.ball.y, vel_x, vel_y);
        state
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Apply a paddle move. Moves past the arena edge are ignored.
    ///
    /// `Command::Quit` is handled by the game loop and does nothing here.
    /// Returns whether a paddle moved.
    pub fn apply_command(&mut self, command: Command) -> bool {
        let Some((side, dir)) = command.paddle_move() else {
            return false;
        };
        let max_y = self.arena.max_paddle_y();
        self.paddle_mut(side).nudge(dir, max_y)
    }

    /// Advance the ball one cell and resolve reflections at its new position.
    pub fn step_ball(&mut self) -> BallStep {
        self.ball.advance();

        let mut step = BallStep {
            wall: self.ball.bounce_off_walls(self.arena),
            paddle: None,
        };
        if self.ball.bounce_off_paddle(&self.left, Side::Left) {
            step.paddle = Some(Side::Left);
        } else if self.ball.bounce_off_paddle(&self.right, Side::Right) {
            step.paddle = Some(Side::Right);
        }
        step
    }

    /// The paddle the ball has escaped past, if any.
    pub fn escaped_past(&self) -> Option<Side> {
        if self.ball.x < self.left.x {
            Some(Side::Left)
        } else if self.ball.x > self.right.x {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.escaped_past().is_some()
    }
}
