//! Common types for the board: coordinates, reveal outcomes and errors.

use alloc::string::String;

use crate::bitgrid::BitGridError;

/// Zero-based board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position addressed by column `x` and row `y`.
    pub const fn from_xy(x: usize, y: usize) -> Self {
        Self { row: y, col: x }
    }
}

/// Index of a ship in its board's ship list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// Result of revealing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealOutcome {
    /// No ship on the cell.
    Miss,
    /// A ship took a hit and is still afloat.
    Hit(ShipId),
    /// This reveal sank the ship.
    Sunk(ShipId),
}

impl RevealOutcome {
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            RevealOutcome::Miss => None,
            RevealOutcome::Hit(id) | RevealOutcome::Sunk(id) => Some(id),
        }
    }

    pub fn is_sink(&self) -> bool {
        matches!(self, RevealOutcome::Sunk(_))
    }
}

/// Errors returned by board construction and play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board is {width}x{height}; each side must be between 5 and 10")]
    InvalidDimension { width: usize, height: usize },
    #[error("{count} ships declared; expected {min} to {max}")]
    InvalidShipCount { count: usize, min: usize, max: usize },
    #[error("unknown ship kind `{0}`")]
    UnknownShipKind(String),
    /// `ship_index` is the 1-based ordinal of the ship in the description.
    #[error("ship number {ship_index} is not a valid ship")]
    InvalidShipShape { ship_index: usize },
    #[error("ship number {ship_index} overlaps a ship placed before it")]
    OverlappingShips { ship_index: usize },
    #[error("line {line}: {reason}")]
    MalformedLayout { line: usize, reason: String },
    #[error("gave up placing ships after {attempts} attempts")]
    PlacementExhausted { attempts: usize },
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("cell ({x}, {y}) was already revealed")]
    AlreadyRevealed { x: usize, y: usize },
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Grid(#[from] BitGridError),
}
