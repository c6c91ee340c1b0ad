mod board;
mod bot_controller;
mod broadcaster;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_heuristic_move, calculate_move};
pub use broadcaster::{GameBroadcaster, GameEvent};
pub use error::{InvalidMoveReason, MoveError};
pub use game_state::TicTacToeGameState;
pub use session::{ComputerMoveTicket, MoveOutcome, TicTacToeSession};
pub use settings::TicTacToeSessionSettings;
pub use types::{
    CELL_COUNT, CENTER, CORNERS, Cell, Difficulty, GameMode, GameStatus, Mark, MoveOrigin, Score,
    WinningLine,
};
pub use win_detector::{WIN_LINES, WinOutcome, check_win, check_win_with_line, evaluate, is_draw};
