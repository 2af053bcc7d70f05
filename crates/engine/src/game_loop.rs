//! The fixed-timestep game loop.
//!
//! Two states: running and terminated. A sampled `Quit` or the ball leaving
//! past a paddle terminates the loop; nothing restarts it. Pacing is a plain
//! sleep per tick with no drift correction.

use std::fmt;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use tui_pong_input::Mailbox;
use tui_pong_term::{FrameBuffer, GameView, Screen};

use crate::core::{Arena, GameState};
use crate::types::{Command, Side};

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player pressed a quit key.
    Quit,
    /// The ball escaped past this side's paddle.
    BallOut(Side),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Quit => f.write_str("quit"),
            Outcome::BallOut(side) => write!(
                f,
                "{} paddle missed: {} player wins",
                side.as_str(),
                side.opponent().as_str()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(Outcome),
}

pub struct GameLoop<S> {
    state: GameState,
    view: GameView,
    fb: FrameBuffer,
    screen: S,
    commands: Mailbox<Command>,
    tick: Duration,
    /// Frames rendered so far; drives the debug counter.
    frames: u64,
    status: LoopState,
}

impl<S: Screen> GameLoop<S> {
    /// New game sized to the screen. The size is queried once here and kept
    /// for the whole run.
    pub fn new(screen: S, commands: Mailbox<Command>, tick: Duration) -> Result<Self> {
        let (width, height) = screen.size()?;
        tracing::info!(width, height, "arena sized from screen");
        let state = GameState::new(Arena::new(width, height));
        Ok(Self::with_state(state, screen, commands, tick))
    }

    /// Resume from an existing state instead of the default layout.
    pub fn with_state(
        state: GameState,
        screen: S,
        commands: Mailbox<Command>,
        tick: Duration,
    ) -> Self {
        let arena = state.arena();
        Self {
            fb: FrameBuffer::new(arena.width as u16, arena.height as u16),
            state,
            view: GameView::default(),
            screen,
            commands,
            tick,
            frames: 0,
            status: LoopState::Running,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one tick. Once terminated, further calls do nothing.
    pub fn step(&mut self) -> Result<LoopState> {
        if let LoopState::Terminated(_) = self.status {
            return Ok(self.status);
        }

        self.render()?;

        if !self.tick.is_zero() {
            thread::sleep(self.tick);
        }

        // No command this tick is normal: paddles simply stay put.
        if let Some(command) = self.commands.try_take() {
            if command == Command::Quit {
                return Ok(self.terminate(Outcome::Quit));
            }
            if !self.state.apply_command(command) {
                tracing::trace!(command = command.as_str(), "paddle at edge");
            }
        }

        let step = self.state.step_ball();
        if step.wall {
            tracing::trace!(x = self.state.ball.x, y = self.state.ball.y, "wall bounce");
        }
        if let Some(side) = step.paddle {
            tracing::trace!(side = side.as_str(), y = self.state.ball.y, "paddle bounce");
        }

        if let Some(side) = self.state.escaped_past() {
            return Ok(self.terminate(Outcome::BallOut(side)));
        }
        Ok(LoopState::Running)
    }

    /// Tick until the game ends.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let LoopState::Terminated(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        self.view.render_into(&self.state, self.frames, &mut self.fb);
        self.frames += 1;
        self.screen.show(&self.fb)
    }

    fn terminate(&mut self, outcome: Outcome) -> LoopState {
        tracing::info!(frames = self.frames, %outcome, "game over");
        self.status = LoopState::Terminated(outcome);
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ball, Paddle};
    use tui_pong_term::HeadlessScreen;

    fn game(width: u16, height: u16) -> (GameLoop<HeadlessScreen>, Mailbox<Command>) {
        let mailbox = Mailbox::new();
        let game = GameLoop::new(
            HeadlessScreen::new(width, height),
            mailbox.clone(),
            Duration::ZERO,
        )
        .unwrap();
        (game, mailbox)
    }

    #[test]
    fn arena_comes_from_screen_size() {
        let (game, _) = game(80, 24);
        assert_eq!(game.state().arena(), Arena::new(80, 24));
        assert_eq!(game.state().left, Paddle::new(0, 9));
        assert_eq!(game.state().right, Paddle::new(79, 9));
    }

    #[test]
    fn each_tick_renders_once_before_moving() {
        let (mut game, _) = game(80, 24);
        assert_eq!(game.step().unwrap(), LoopState::Running);

        // The shown frame is the state before the ball moved.
        let fb = game.screen().last_frame().unwrap();
        assert_eq!(fb.get(40, 12).unwrap().ch, crate::types::BALL_GLYPH);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');
        assert_eq!(game.state().ball, Ball::new(39, 11, -1, -1));
        assert_eq!(game.frames(), 1);
        assert_eq!(game.screen().frames_shown(), 1);
    }

    #[test]
    fn quit_terminates_before_physics() {
        let (mut game, mailbox) = game(80, 24);
        mailbox.publish(Command::Quit);
        assert_eq!(game.step().unwrap(), LoopState::Terminated(Outcome::Quit));
        assert_eq!(game.state().ball, Ball::new(40, 12, -1, -1));

        // Terminated is final.
        mailbox.publish(Command::MoveLeftPaddleUp);
        assert_eq!(game.step().unwrap(), LoopState::Terminated(Outcome::Quit));
        assert_eq!(game.screen().frames_shown(), 1);
        assert_eq!(game.state().left.y, 9);
    }

    #[test]
    fn command_is_consumed_once() {
        let (mut game, mailbox) = game(80, 24);
        mailbox.publish(Command::MoveRightPaddleDown);
        game.step().unwrap();
        game.step().unwrap();
        assert_eq!(game.state().right.y, 10);
        assert_eq!(mailbox.try_take(), None);
    }

    #[test]
    fn untouched_game_ends_with_left_miss() {
        let (mut game, _) = game(80, 24);
        let outcome = game.run().unwrap();
        assert_eq!(outcome, Outcome::BallOut(Side::Left));
        assert_eq!(game.frames(), 41);
        assert_eq!(game.step().unwrap(), LoopState::Terminated(outcome));
        assert_eq!(game.frames(), 41);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Quit.to_string(), "quit");
        assert_eq!(
            Outcome::BallOut(Side::Left).to_string(),
            "left paddle missed: right player wins"
        );
    }
}
