use super::board::Board;
use super::error::{InvalidMoveReason, MoveError};
use super::types::{CELL_COUNT, GameStatus, Mark};
use super::win_detector::{WinOutcome, evaluate};

/// One round: the board, whose turn it is and how it ended.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    /// Validates and applies a move. Nothing changes on error.
    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::invalid(InvalidMoveReason::GameOver));
        }

        if mark != self.current_mark {
            return Err(MoveError::NotYourTurn { current: self.current_mark });
        }

        if index >= CELL_COUNT {
            return Err(MoveError::invalid(InvalidMoveReason::OutOfBounds(index)));
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.move_count += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    fn check_game_over(&mut self) {
        if let WinOutcome::Win(line) = evaluate(&self.board) {
            self.status = GameStatus::Won(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Drawn;
        }
    }

    pub fn get_winner(&self) -> Option<Mark> {
        self.status.winner()
    }
}
