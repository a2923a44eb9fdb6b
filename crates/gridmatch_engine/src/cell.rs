//! Cell index enum for board positions.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell on the board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum CellIndex {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl CellIndex {
    /// Display label for this cell.
    pub fn label(&self) -> &'static str {
        match self {
            CellIndex::TopLeft => "Top-left",
            CellIndex::TopCenter => "Top-center",
            CellIndex::TopRight => "Top-right",
            CellIndex::MiddleLeft => "Middle-left",
            CellIndex::Center => "Center",
            CellIndex::MiddleRight => "Middle-right",
            CellIndex::BottomLeft => "Bottom-left",
            CellIndex::BottomCenter => "Bottom-center",
            CellIndex::BottomRight => "Bottom-right",
        }
    }

    /// Converts to a board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            CellIndex::TopLeft => 0,
            CellIndex::TopCenter => 1,
            CellIndex::TopRight => 2,
            CellIndex::MiddleLeft => 3,
            CellIndex::Center => 4,
            CellIndex::MiddleRight => 5,
            CellIndex::BottomLeft => 6,
            CellIndex::BottomCenter => 7,
            CellIndex::BottomRight => 8,
        }
    }

    /// Creates a cell index from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(CellIndex::TopLeft),
            1 => Some(CellIndex::TopCenter),
            2 => Some(CellIndex::TopRight),
            3 => Some(CellIndex::MiddleLeft),
            4 => Some(CellIndex::Center),
            5 => Some(CellIndex::MiddleRight),
            6 => Some(CellIndex::BottomLeft),
            7 => Some(CellIndex::BottomCenter),
            8 => Some(CellIndex::BottomRight),
            _ => None,
        }
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this cell (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// All 9 cells in index order.
    pub const ALL: [CellIndex; 9] = [
        CellIndex::TopLeft,
        CellIndex::TopCenter,
        CellIndex::TopRight,
        CellIndex::MiddleLeft,
        CellIndex::Center,
        CellIndex::MiddleRight,
        CellIndex::BottomLeft,
        CellIndex::BottomCenter,
        CellIndex::BottomRight,
    ];

    /// Cells still open on the given board.
    pub fn open(board: &Board) -> Vec<CellIndex> {
        CellIndex::iter()
            .filter(|cell| board.is_empty(*cell))
            .collect()
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
