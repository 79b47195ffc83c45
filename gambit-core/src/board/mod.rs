//! Board model
//!
//! Single authoritative model of the physical board: piece grid, sensed
//! presence grid, the at-most-one lifted piece, and the turn indicator.
//! The grid is 8 rows by 12 columns; columns 2-9 are the playing files,
//! columns 0-1 and 10-11 are graveyard slots for captured pieces.

use heapless::String;

/// Number of board rows
pub const ROWS: usize = 8;

/// Number of board columns (8 playing files + 2 graveyard columns per side)
pub const COLS: usize = 12;

/// Grid column of playing file 0
pub const PLAYING_COL_OFFSET: u8 = 2;

/// Graveyard columns in fill order (left bank first)
pub const GRAVEYARD_COLUMNS: [u8; 4] = [0, 1, 10, 11];

/// Canonical starting layout (standard chess setup, empty graveyards)
const INITIAL_STATE: [[u8; COLS]; ROWS] = [
    *b"..RNBQKBNR..",
    *b"..PPPPPPPP..",
    *b"............",
    *b"............",
    *b"............",
    *b"............",
    *b"..pppppppp..",
    *b"..rnbqkbnr..",
];

/// Piece side, encoded by symbol case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Uppercase symbols (top rows at startup)
    White,
    /// Lowercase symbols (bottom rows at startup)
    Black,
}

/// Whose action the system is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Turn {
    /// Awaiting a physical move by the human player
    Human,
    /// Awaiting a move from the remote source (app/engine)
    Remote,
}

/// One board cell: '.' for empty, otherwise a case-coded piece letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell(u8);

impl Cell {
    /// The empty cell symbol
    pub const EMPTY: Cell = Cell(b'.');

    /// Check if the cell holds no piece
    pub fn is_empty(self) -> bool {
        self.0 == b'.'
    }

    /// Check if the cell holds a knight of either side
    pub fn is_knight(self) -> bool {
        self.0 == b'n' || self.0 == b'N'
    }

    /// Side of the occupying piece, or `None` for an empty cell
    pub fn side(self) -> Option<Side> {
        if self.is_empty() {
            None
        } else if self.0.is_ascii_uppercase() {
            Some(Side::White)
        } else {
            Some(Side::Black)
        }
    }

    /// Raw symbol byte
    pub fn symbol(self) -> u8 {
        self.0
    }
}

/// A grid coordinate (row 0-7, column 0-11)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a grid square from raw grid coordinates
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a grid square from playing-area coordinates (both 0-7)
    pub const fn from_playing(row: u8, col: u8) -> Self {
        Self {
            row,
            col: col + PLAYING_COL_OFFSET,
        }
    }
}

/// Authoritative board state
///
/// Mutated exclusively through [`BoardState::move_piece`],
/// [`BoardState::reset`], and the lifted-piece/turn accessors. No legality
/// checking happens here; callers own coordinate correctness.
#[derive(Debug, Clone)]
pub struct BoardState {
    state: [[u8; COLS]; ROWS],
    presence: [[bool; COLS]; ROWS],
    lifted: Option<Square>,
    turn: Turn,
    human_side: Side,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Create a board in the canonical starting state
    ///
    /// The human plays the lowercase pieces (the rows nearest the player's
    /// edge of the board).
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            presence: Self::initial_presence(),
            lifted: None,
            turn: Turn::Human,
            human_side: Side::Black,
        }
    }

    fn initial_presence() -> [[bool; COLS]; ROWS] {
        let mut presence = [[false; COLS]; ROWS];
        let mut r = 0;
        while r < ROWS {
            let mut c = 0;
            while c < COLS {
                presence[r][c] = INITIAL_STATE[r][c] != b'.';
                c += 1;
            }
            r += 1;
        }
        presence
    }

    /// Reinitialize every field to the canonical starting state
    pub fn reset(&mut self) {
        self.state = INITIAL_STATE;
        self.presence = Self::initial_presence();
        self.lifted = None;
        self.turn = Turn::Human;
    }

    /// Piece at a grid square
    pub fn cell(&self, sq: Square) -> Cell {
        Cell(self.state[sq.row as usize][sq.col as usize])
    }

    /// Sensed presence at a grid square
    pub fn presence(&self, sq: Square) -> bool {
        self.presence[sq.row as usize][sq.col as usize]
    }

    /// Overwrite the sensed presence for a grid square
    ///
    /// Called by the scanner once a transition survives debounce.
    pub fn set_presence(&mut self, sq: Square, present: bool) {
        self.presence[sq.row as usize][sq.col as usize] = present;
    }

    /// Transcribe a piece from one square to another
    ///
    /// Copies the symbol, clears the source, and keeps the presence grid
    /// in agreement with the piece grid. Pure transcription; no legality
    /// validation.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        self.state[to.row as usize][to.col as usize] =
            self.state[from.row as usize][from.col as usize];
        self.state[from.row as usize][from.col as usize] = b'.';
        self.presence[to.row as usize][to.col as usize] = true;
        self.presence[from.row as usize][from.col as usize] = false;
    }

    /// Place a symbol directly on a square, syncing presence
    ///
    /// Setup aid for non-canonical positions; normal play mutates the
    /// board only through [`BoardState::move_piece`].
    pub fn place(&mut self, sq: Square, symbol: u8) {
        self.state[sq.row as usize][sq.col as usize] = symbol;
        self.presence[sq.row as usize][sq.col as usize] = symbol != b'.';
    }

    /// First free graveyard slot in fill order (rows 0-7, columns 0, 1, 10, 11)
    pub fn first_free_grave(&self) -> Option<Square> {
        for row in 0..ROWS as u8 {
            for &col in GRAVEYARD_COLUMNS.iter() {
                let sq = Square::new(row, col);
                if self.cell(sq).is_empty() {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// The square of the currently lifted piece, if any
    pub fn lifted(&self) -> Option<Square> {
        self.lifted
    }

    /// Record or clear the lifted piece
    pub fn set_lifted(&mut self, sq: Option<Square>) {
        self.lifted = sq;
    }

    /// Side the human player physically controls
    pub fn human_side(&self) -> Side {
        self.human_side
    }

    /// Current turn indicator
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Set the turn indicator
    pub fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    /// Render the piece grid as text for diagnostics
    ///
    /// One line per row, symbols separated by spaces.
    pub fn render(&self) -> String<256> {
        let mut out = String::new();
        for row in self.state.iter() {
            for &symbol in row.iter() {
                let _ = out.push(symbol as char);
                let _ = out.push(' ');
            }
            let _ = out.push('\n');
        }
        out
    }
}
