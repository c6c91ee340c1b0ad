use crate::SessionRng;
use super::board::Board;
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::types::{CENTER, CORNERS, Difficulty, Mark};
use super::win_detector::check_win;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.snapshot(),
            current_mark: state.current_mark,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    if input.board.is_full() {
        return Err(MoveError::NoMovesAvailable);
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => calculate_medium_move(&input, rng),
        Difficulty::Hard => calculate_heuristic_move(&input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, MoveError> {
    rng.choose(&input.board.available_moves())
        .ok_or(MoveError::NoMovesAvailable)
}

/// Flips a fair coin on every call between the heuristic and a random pick.
fn calculate_medium_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, MoveError> {
    if rng.random_bool(0.5) {
        calculate_heuristic_move(input, rng)
    } else {
        calculate_random_move(input, rng)
    }
}

/// Win, block, center, a random corner, then anything.
pub fn calculate_heuristic_move(
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent();
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return Err(MoveError::NoMovesAvailable);
    }

    let mut board = input.board.snapshot();

    if let Some(index) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Ok(index);
    }

    if board.is_empty(CENTER) {
        return Ok(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_empty(index))
        .collect();
    if let Some(index) = rng.choose(&open_corners) {
        return Ok(index);
    }

    calculate_random_move(input, rng)
}

/// First cell in ascending order where `mark` would complete a line.
/// Each trial mark is reverted before the next one is tried.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        if board.place(index, mark).is_err() {
            continue;
        }
        let winner = check_win(board);
        board.clear(index);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}
