use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use twenty48::engine::{self, Board, Move};

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(42);
    let (mut board, mut state) = engine::new_game(4, &mut rng);
    let mut boards = vec![Board::empty(4), board.clone()];
    // Derive a variety of densities deterministically
    let seq = [Move::Left, Move::Up, Move::Right, Move::Down];
    for i in 0..20 {
        let (next, next_state) = board.make_move(seq[i % seq.len()], state, &mut rng);
        board = next;
        state = next_state;
        boards.push(board.clone());
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    for (name, dir) in [
        ("shift/left", Move::Left),
        ("shift/right", Move::Right),
        ("shift/up", Move::Up),
        ("shift/down", Move::Down),
    ] {
        c.bench_function(name, |bch| {
            let boards = corpus();
            bch.iter(|| {
                for board in &boards {
                    black_box(board.shift(dir));
                }
            })
        });
    }
}

fn bench_spawn_and_move(c: &mut Criterion) {
    c.bench_function("board/insert_random_tile", |bch| {
        bch.iter_batched(
            || (Board::empty(4), StdRng::seed_from_u64(7)),
            |(mut board, mut rng)| {
                for _ in 0..16 {
                    board.insert_random_tile(&mut rng);
                }
                black_box(board)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("board/make_move_left", |bch| {
        bch.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(9);
                let (board, state) = engine::new_game(4, &mut rng);
                (board, state, rng)
            },
            |(mut board, mut state, mut rng)| {
                for _ in 0..64 {
                    let (next, next_state) = board.make_move(Move::Left, state, &mut rng);
                    board = next;
                    state = next_state;
                }
                black_box(board)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_state_queries(c: &mut Criterion) {
    c.bench_function("query/state", |bch| {
        let boards = corpus();
        bch.iter(|| {
            for board in &boards {
                black_box(board.state());
            }
        })
    });
    c.bench_function("query/count_empty", |bch| {
        let boards = corpus();
        bch.iter(|| {
            for board in &boards {
                black_box(board.count_empty());
            }
        })
    });
    c.bench_function("query/highest_tile", |bch| {
        let boards = corpus();
        bch.iter(|| {
            for board in &boards {
                black_box(board.highest_tile());
            }
        })
    });
}

criterion_group!(
    engine_ops,
    bench_shift,
    bench_spawn_and_move,
    bench_state_queries
);
criterion_main!(engine_ops);
