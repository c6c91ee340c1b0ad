use crate::RoundId;
use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    GameOver,
    CellOccupied(usize),
    OutOfBounds(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove { reason: InvalidMoveReason },
    NotYourTurn { current: Mark },
    /// The move selector was asked for a move on a full board.
    NoMovesAvailable,
    /// A computer move scheduled for a round that has since been restarted.
    StaleRound { ticket: RoundId, current: RoundId },
}

impl MoveError {
    pub fn invalid(reason: InvalidMoveReason) -> Self {
        MoveError::InvalidMove { reason }
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidMove { reason } => match reason {
                InvalidMoveReason::GameOver => write!(f, "Invalid move: game is already over"),
                InvalidMoveReason::CellOccupied(index) => {
                    write!(f, "Invalid move: cell {} is already marked", index)
                }
                InvalidMoveReason::OutOfBounds(index) => {
                    write!(f, "Invalid move: cell {} is out of bounds", index)
                }
            },
            MoveError::NotYourTurn { current } => write!(f, "Not your turn: {} is to move", current),
            MoveError::NoMovesAvailable => write!(f, "No moves available"),
            MoveError::StaleRound { ticket, current } => {
                write!(f, "Stale computer move for round {} (current round {})", ticket, current)
            }
        }
    }
}

impl std::error::Error for MoveError {}
