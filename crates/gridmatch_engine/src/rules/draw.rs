//! Draw detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winning line is a drawn round.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_mark;
    use super::*;
    use crate::cell::CellIndex;
    use crate::types::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_mark(board).is_none()
    }

    #[test]
    fn empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn partial_board_not_full() {
        let mut board = Board::new();
        board.place(CellIndex::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        board.place(CellIndex::TopLeft, Mark::X);
        board.place(CellIndex::TopCenter, Mark::O);
        board.place(CellIndex::TopRight, Mark::X);
        board.place(CellIndex::MiddleLeft, Mark::X);
        board.place(CellIndex::Center, Mark::O);
        board.place(CellIndex::MiddleRight, Mark::O);
        board.place(CellIndex::BottomLeft, Mark::O);
        board.place(CellIndex::BottomCenter, Mark::X);
        board.place(CellIndex::BottomRight, Mark::X);

        assert!(is_draw(&board));
    }

    #[test]
    fn full_board_with_line_is_not_draw() {
        let mut board = Board::new();
        for cell in CellIndex::ALL {
            board.place(cell, Mark::X);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
