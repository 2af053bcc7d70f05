use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::{Arena, GameState};
use tui_pong::term::{encode_full_into, FrameBuffer, GameView};
use tui_pong::types::Command;

fn bench_ball_step(c: &mut Criterion) {
    let arena = Arena::new(200, 60);

    c.bench_function("ball_step", |b| {
        let mut state = GameState::new(arena);
        b.iter(|| {
            state.step_ball();
            if state.is_game_over() {
                state = GameState::new(arena);
            }
        })
    });
}

fn bench_paddle_command(c: &mut Criterion) {
    let mut state = GameState::new(Arena::new(80, 24));

    c.bench_function("paddle_command", |b| {
        b.iter(|| {
            state.apply_command(black_box(Command::MoveLeftPaddleUp));
            state.apply_command(black_box(Command::MoveLeftPaddleDown));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(Arena::new(200, 60));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(200, 60);
    let mut out = Vec::with_capacity(64 * 1024);
    let mut frame = 0u64;

    c.bench_function("render_full_frame_200x60", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), frame, &mut fb);
            out.clear();
            encode_full_into(&fb, &mut out).unwrap();
            frame += 1;
        })
    });
}

criterion_group!(benches, bench_ball_step, bench_paddle_command, bench_render);
criterion_main!(benches);
