use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{BotInput, Board, Difficulty, Mark, calculate_move, check_win};

fn self_play(difficulty: Difficulty, rng: &mut SessionRng) -> Option<Mark> {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while let Ok(index) = calculate_move(
        difficulty,
        BotInput {
            board: board.snapshot(),
            current_mark,
        },
        rng,
    ) {
        if board.place(index, current_mark).is_err() {
            break;
        }
        if let Some(winner) = check_win(&board) {
            return Some(winner);
        }
        current_mark = current_mark.opponent();
    }
    None
}

fn bench_single_move_mid_game(rng: &mut SessionRng) {
    let mut board = Board::new();
    for (index, mark) in [(0, Mark::X), (4, Mark::O), (8, Mark::X)] {
        let _ = board.place(index, mark);
    }
    let input = BotInput {
        board,
        current_mark: Mark::O,
    };
    let _ = black_box(calculate_move(Difficulty::Hard, input, rng));
}

fn move_selector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_selector");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut rng = SessionRng::new(2024);
        group.bench_function(format!("self_play_{}", difficulty), |b| {
            b.iter(|| black_box(self_play(difficulty, &mut rng)))
        });
    }

    let mut rng = SessionRng::new(7);
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_single_move_mid_game(&mut rng))
    });

    group.finish();
}

criterion_group!(benches, move_selector_bench);
criterion_main!(benches);
