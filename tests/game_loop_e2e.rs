//! End-to-end runs of the game loop on a headless screen.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent};

use tui_pong::core::{Arena, GameState, Paddle};
use tui_pong::engine::{GameLoop, LoopState, Outcome};
use tui_pong::input::{InputSampler, Mailbox};
use tui_pong::term::HeadlessScreen;
use tui_pong::types::{Command, Side, PADDLE_GLYPH};

fn headless_loop(state: GameState, mailbox: &Mailbox<Command>) -> GameLoop<HeadlessScreen> {
    let arena = state.arena();
    GameLoop::with_state(
        state,
        HeadlessScreen::new(arena.width as u16, arena.height as u16),
        mailbox.clone(),
        Duration::ZERO,
    )
}

#[test]
fn every_start_direction_reaches_a_bounce_or_game_over() {
    let arena = Arena::new(80, 24);
    for (vx, vy) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
        let mailbox = Mailbox::new();
        let state = GameState::with_ball_velocity(arena, vx, vy);
        assert_eq!((state.left.y, state.right.y), (9, 9));
        assert_eq!((state.ball.x, state.ball.y), (40, 12));

        let mut game = headless_loop(state, &mailbox);
        let mut resolved = false;
        for _ in 0..(2 * arena.width) {
            let status = game.step().unwrap();
            if game.state().ball.vel_x() != vx || matches!(status, LoopState::Terminated(_)) {
                resolved = true;
                break;
            }
        }
        assert!(resolved, "start velocity ({vx}, {vy}) never resolved");
    }
}

#[test]
fn untouched_paddles_let_the_ball_through() {
    let mailbox = Mailbox::new();
    let mut game = headless_loop(GameState::new(Arena::new(80, 24)), &mailbox);
    assert_eq!(game.run().unwrap(), Outcome::BallOut(Side::Left));
    assert!(game.state().ball.x < 0);
}

#[test]
fn moved_paddle_returns_the_ball() {
    let mailbox = Mailbox::new();
    let mut game = headless_loop(GameState::new(Arena::new(80, 24)), &mailbox);

    // Drive the left paddle to the bottom; extra presses are clamped away.
    for _ in 0..12 {
        mailbox.publish(Command::MoveLeftPaddleDown);
        assert_eq!(game.step().unwrap(), LoopState::Running);
    }
    assert_eq!(game.state().left, Paddle::new(0, 18));

    while game.state().ball.vel_x() < 0 {
        assert_eq!(game.step().unwrap(), LoopState::Running);
    }
    assert_eq!(game.frames(), 39);
    assert_eq!((game.state().ball.x, game.state().ball.y), (1, 19));

    // The ball is now heading right and the game plays on.
    let outcome = game.run().unwrap();
    assert!(matches!(outcome, Outcome::BallOut(_)));
    assert!(game.frames() > 39);
}

#[test]
fn ticks_without_input_keep_paddles_still() {
    let mailbox = Mailbox::new();
    let mut game = headless_loop(GameState::new(Arena::new(80, 24)), &mailbox);
    let before = (game.state().left, game.state().right);
    for _ in 0..20 {
        game.step().unwrap();
    }
    assert_eq!((game.state().left, game.state().right), before);
}

#[test]
fn sampler_quit_reaches_the_loop() {
    let mailbox = Mailbox::new();
    let mut script: Vec<Event> = ['w', 's', 'q']
        .into_iter()
        .map(|c| Event::Key(KeyEvent::from(KeyCode::Char(c))))
        .collect();
    script.reverse();
    let source = move || script.pop().ok_or_else(|| anyhow::anyhow!("terminal closed"));

    InputSampler::new(source, mailbox.clone())
        .spawn()
        .unwrap()
        .join()
        .unwrap();

    // The paddle moves were overwritten before the loop sampled them.
    let mut game = headless_loop(GameState::new(Arena::new(80, 24)), &mailbox);
    assert_eq!(game.step().unwrap(), LoopState::Terminated(Outcome::Quit));
    assert_eq!(game.state().left.y, 9);
}

#[test]
fn screen_shows_one_full_frame_per_tick() {
    let mailbox = Mailbox::new();
    let mut game = headless_loop(GameState::new(Arena::new(30, 12)), &mailbox);
    for _ in 0..3 {
        game.step().unwrap();
    }

    let screen = game.screen();
    assert_eq!(screen.frames_shown(), 3);
    let fb = screen.last_frame().unwrap();
    assert_eq!((fb.width(), fb.height()), (30, 12));
    assert_eq!(fb.get(0, 0).unwrap().ch, '2');

    let paddle_cells = fb.cells().iter().filter(|c| c.ch == PADDLE_GLYPH).count();
    assert_eq!(paddle_cells, 12);
}
