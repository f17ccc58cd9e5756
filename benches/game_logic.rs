use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stacker::core::{ActivePiece, Board, PieceQueue, Randomizer};
use stacker::engine::Game;
use stacker::input::HeldActions;
use stacker::types::{GameAction, GameConfig, KickTables, PieceKind, Point, Spin};

fn bench_update(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), 12345).unwrap();
    let mut held = HeldActions::new();

    c.bench_function("game_update_idle", |b| {
        b.iter(|| {
            held.step();
            let result = game.update(black_box(1.0), &held);
            if result.game_over {
                game.restart();
            }
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), 12345).unwrap();
    let mut held = HeldActions::new();

    c.bench_function("hard_drop_cycle", |b| {
        b.iter(|| {
            held.step();
            held.press(GameAction::HardDrop);
            game.update(1.0, &held);
            held.step();
            held.release(GameAction::HardDrop);
            if game.update(1.0, &held).game_over {
                game.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let template = Board::new(10, 20, 2).with_rows(&[
        "IIIIIIIIII",
        "IIIIIIIIII",
        "IIIIIIIIII",
        "IIIIIIIIII",
    ]);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = template.clone();
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_queue_consume(c: &mut Criterion) {
    let mut queue = PieceQueue::new(4, Randomizer::seeded(12345));

    c.bench_function("queue_consume", |b| {
        b.iter(|| black_box(queue.consume()))
    });
}

fn bench_to_bottom(c: &mut Criterion) {
    let board = Board::new(10, 20, 2);

    c.bench_function("to_bottom", |b| {
        b.iter(|| {
            let mut piece = ActivePiece::spawn(PieceKind::T, Point::new(3, 0));
            black_box(piece.to_bottom(&board))
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new(10, 20, 2);
    let kicks = KickTables::default();
    let mut piece = ActivePiece::spawn(PieceKind::T, Point::new(4, 10));

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(piece.try_rotate(&board, Spin::Cw, &kicks)))
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_hard_drop_cycle,
    bench_line_clear,
    bench_queue_consume,
    bench_to_bottom,
    bench_try_rotate
);
criterion_main!(benches);
