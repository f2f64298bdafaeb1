//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines as `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark fills any row, column or diagonal,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a.0, a.1);
        if sq == board.get(b.0, b.1) && sq == board.get(c.0, c.1) {
            if let Some(Square::Occupied(mark)) = sq {
                return Some(mark);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.set(r, c, Square::Occupied(mark)).expect("On board");
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::X, &line);
            assert_eq!(check_winner(&board), Some(Mark::X), "line {:?}", line);
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(Mark::O, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[(0, 0), (0, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[(0, 0), (0, 1)]);
        board.set(0, 2, Square::Occupied(Mark::O)).expect("On board");
        assert_eq!(check_winner(&board), None);
    }
}
