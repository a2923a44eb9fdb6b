//! Core domain types for the match tracker.

use crate::cell::CellIndex;
use crate::leaderboard::Leaderboard;
use serde::{Deserialize, Serialize};

/// A mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark (always moves first).
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given index.
    pub fn get(&self, cell: CellIndex) -> Cell {
        self.cells[cell.to_index()]
    }

    /// Places a mark at the given index.
    ///
    /// Callers check emptiness first; a round never rewrites a cell.
    pub fn place(&mut self, cell: CellIndex, mark: Mark) {
        self.cells[cell.to_index()] = Cell::Occupied(mark);
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, cell: CellIndex) -> bool {
        self.get(cell) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the marks on the board, as `(x_count, o_count)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        let x = self
            .cells
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(Mark::X)))
            .count();
        let o = self
            .cells
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(Mark::O)))
            .count();
        (x, o)
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Cell::Empty => (idx + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the two seats in a match.
///
/// Slot one always plays X and always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// The first seat (id 1, plays X).
    One,
    /// The second seat (id 2, plays O).
    Two,
}

impl PlayerSlot {
    /// Numeric id of the slot (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            PlayerSlot::One => 1,
            PlayerSlot::Two => 2,
        }
    }

    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// The mark this seat plays.
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::One => Mark::X,
            PlayerSlot::Two => Mark::O,
        }
    }
}

/// A player in the current match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    slot: PlayerSlot,
    name: String,
    mark: Mark,
    score: u32,
}

impl Player {
    /// Creates a player seated in the given slot with a zero score.
    pub fn new(slot: PlayerSlot, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            mark: slot.mark(),
            score: 0,
        }
    }

    /// The seat this player occupies.
    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Points accumulated in the current match.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds round points. Scores only ever grow within a match.
    pub(crate) fn award(&mut self, points: u32) {
        self.score += points;
    }
}

/// The two seats of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub(crate) player_one: Option<Player>,
    pub(crate) player_two: Option<Player>,
}

impl Players {
    /// Returns the player in the given slot, if seated.
    pub fn get(&self, slot: PlayerSlot) -> Option<&Player> {
        match slot {
            PlayerSlot::One => self.player_one.as_ref(),
            PlayerSlot::Two => self.player_two.as_ref(),
        }
    }

    /// Returns both players, or `None` unless both seats are filled.
    pub fn both(&self) -> Option<(&Player, &Player)> {
        Some((self.player_one.as_ref()?, self.player_two.as_ref()?))
    }

    /// Checks whether both seats are filled.
    pub fn complete(&self) -> bool {
        self.player_one.is_some() && self.player_two.is_some()
    }
}

/// Outcome state of the round in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is still accepting moves.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board filled with no line.
    Drawn,
}

/// One playable 3x3 game within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) to_move: PlayerSlot,
    pub(crate) status: RoundStatus,
}

impl Round {
    /// Creates a fresh round: empty board, slot one to move.
    pub fn fresh() -> Self {
        Self {
            board: Board::new(),
            to_move: PlayerSlot::One,
            status: RoundStatus::InProgress,
        }
    }

    /// The round's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat whose turn it is.
    ///
    /// Frozen at the mover once the round completes.
    pub fn to_move(&self) -> PlayerSlot {
        self.to_move
    }

    /// Current outcome state.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Checks whether the round reached a terminal state.
    pub fn is_complete(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// The mark that won the round, if any.
    pub fn winning_mark(&self) -> Option<Mark> {
        match self.status {
            RoundStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Complete match state: the single value the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) players: Players,
    pub(crate) current_round: Round,
    pub(crate) round_number: u32,
    pub(crate) total_rounds: u32,
    pub(crate) is_match_complete: bool,
    pub(crate) match_winner: Option<Player>,
    pub(crate) leaderboard: Leaderboard,
    pub(crate) started: bool,
}

/// Rounds played per match unless configured otherwise.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;

impl MatchState {
    /// Creates the not-started initial state with the given round total.
    pub fn with_total_rounds(total_rounds: u32) -> Self {
        Self {
            players: Players::default(),
            current_round: Round::fresh(),
            round_number: 1,
            total_rounds,
            is_match_complete: false,
            match_winner: None,
            leaderboard: Leaderboard::default(),
            started: false,
        }
    }

    /// Both seats of the match.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The round currently in play.
    pub fn current_round(&self) -> &Round {
        &self.current_round
    }

    /// Number of the round in play, starting at 1.
    ///
    /// Transiently reaches `total_rounds + 1` during the advance that
    /// completes the match.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Configured rounds per match.
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Checks whether an advance was attempted past the final round.
    pub fn is_match_complete(&self) -> bool {
        self.is_match_complete
    }

    /// The player who took the match on points, if the match completed
    /// without a tie.
    pub fn match_winner(&self) -> Option<&Player> {
        self.match_winner.as_ref()
    }

    /// Cross-match score ledger.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Checks whether a match has been started.
    pub fn started(&self) -> bool {
        self.started
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::with_total_rounds(DEFAULT_TOTAL_ROUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shape() {
        let state = MatchState::default();
        assert!(!state.started());
        assert!(!state.is_match_complete());
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.total_rounds(), 5);
        assert!(state.players().get(PlayerSlot::One).is_none());
        assert!(state.leaderboard().is_empty());
        assert_eq!(state.current_round().status(), RoundStatus::InProgress);
    }

    #[test]
    fn slot_marks_are_fixed() {
        assert_eq!(PlayerSlot::One.mark(), Mark::X);
        assert_eq!(PlayerSlot::Two.mark(), Mark::O);
        assert_eq!(PlayerSlot::One.other(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::One.id(), 1);
        assert_eq!(PlayerSlot::Two.id(), 2);
    }

    #[test]
    fn board_render_shows_marks_and_indices() {
        let mut board = Board::new();
        board.place(CellIndex::TopLeft, Mark::X);
        board.place(CellIndex::Center, Mark::O);
        let rendered = board.render();
        assert!(rendered.starts_with("X|2|3"));
        assert!(rendered.contains("4|O|6"));
    }

    #[test]
    fn mark_counts_track_placements() {
        let mut board = Board::new();
        assert_eq!(board.mark_counts(), (0, 0));
        board.place(CellIndex::TopLeft, Mark::X);
        board.place(CellIndex::Center, Mark::O);
        board.place(CellIndex::TopRight, Mark::X);
        assert_eq!(board.mark_counts(), (2, 1));
    }

    #[test]
    fn state_serde_round_trip() {
        let state = MatchState::default();
        let json = serde_json::to_string(&state).expect("serialize");
        let back: MatchState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
