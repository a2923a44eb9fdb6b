//! Win detection over the fixed set of lines.

use crate::cell::CellIndex;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Checks the board for a completed line.
///
/// Scans the 3 rows, 3 columns, and 2 diagonals in that fixed order and
/// returns the mark of the first line holding three equal non-empty cells,
/// or `None`.
#[instrument(skip(board))]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    const LINES: [[CellIndex; 3]; 8] = [
        // Rows
        [CellIndex::TopLeft, CellIndex::TopCenter, CellIndex::TopRight],
        [
            CellIndex::MiddleLeft,
            CellIndex::Center,
            CellIndex::MiddleRight,
        ],
        [
            CellIndex::BottomLeft,
            CellIndex::BottomCenter,
            CellIndex::BottomRight,
        ],
        // Columns
        [
            CellIndex::TopLeft,
            CellIndex::MiddleLeft,
            CellIndex::BottomLeft,
        ],
        [
            CellIndex::TopCenter,
            CellIndex::Center,
            CellIndex::BottomCenter,
        ],
        [
            CellIndex::TopRight,
            CellIndex::MiddleRight,
            CellIndex::BottomRight,
        ],
        // Diagonals
        [CellIndex::TopLeft, CellIndex::Center, CellIndex::BottomRight],
        [CellIndex::TopRight, CellIndex::Center, CellIndex::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}
