use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then the two diagonals. The first match in this
/// order is the one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinOutcome {
    NoWin,
    Win(WinningLine),
}

pub fn evaluate(board: &Board) -> WinOutcome {
    for cells in WIN_LINES {
        let [a, b, c] = cells;
        let Some(mark) = board.get(a).mark() else {
            continue;
        };
        if board.get(b) == board.get(a) && board.get(c) == board.get(a) {
            return WinOutcome::Win(WinningLine::new(mark, cells));
        }
    }
    WinOutcome::NoWin
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    match evaluate(board) {
        WinOutcome::Win(line) => Some(line),
        WinOutcome::NoWin => None,
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// A full board is only a draw once it is known not to hold a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board) == WinOutcome::NoWin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::Cell;

    fn relabel(board: &Board) -> Board {
        let mut cells = *board.cells();
        for cell in cells.iter_mut() {
            *cell = match cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_has_no_win() {
        assert_eq!(evaluate(&Board::new()), WinOutcome::NoWin);
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_every_line_is_detected() {
        for cells in WIN_LINES {
            let mut board = Board::new();
            for index in cells {
                board.place(index, Mark::O).unwrap();
            }
            assert_eq!(evaluate(&board), WinOutcome::Win(WinningLine::new(Mark::O, cells)));
        }
    }

    #[test]
    fn test_boards_with_fewer_than_five_marks_never_win() {
        for pattern in ["XX_OO____", "X_X_O_O__", "XO_______", "X___O___X"] {
            assert_eq!(evaluate(&Board::from_pattern(pattern)), WinOutcome::NoWin);
        }
    }

    #[test]
    fn test_evaluate_is_symmetric_under_relabeling() {
        for pattern in ["XXXOO____", "OX_OX_O_X", "XOXOXOOXO", "X_O_XO__X"] {
            let board = Board::from_pattern(pattern);
            let flipped = evaluate(&relabel(&board));
            match evaluate(&board) {
                WinOutcome::NoWin => assert_eq!(flipped, WinOutcome::NoWin),
                WinOutcome::Win(line) => assert_eq!(
                    flipped,
                    WinOutcome::Win(WinningLine::new(line.mark.opponent(), line.cells))
                ),
            }
        }
    }

    #[test]
    fn test_first_line_in_order_wins_the_tie() {
        // Not reachable in play, but the answer must be deterministic.
        let board = Board::from_pattern("XXXXXXXXX");
        assert_eq!(check_win_with_line(&board).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_pattern("XOXOXOOXO");
        assert_eq!(evaluate(&board), WinOutcome::NoWin);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_pattern("XXXOOXXOO");
        assert_eq!(check_win(&board), Some(Mark::X));
        assert!(!is_draw(&board));
    }
}
