//! Ship kinds and placed ships.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

use alloc::string::ToString;

/// Tile colour shown once a cell holding this kind is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Yellow,
    Green,
    White,
}

/// The fixed catalog of ship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Every kind, longest first.
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Upper-case name as written in layout descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "CARRIER",
            ShipKind::Battleship => "BATTLESHIP",
            ShipKind::Submarine => "SUBMARINE",
            ShipKind::Destroyer => "DESTROYER",
        }
    }

    /// Number of cells the ship spans.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Points for a non-sinking hit, before any multiplier or bonus.
    pub const fn points(self) -> u32 {
        match self {
            ShipKind::Carrier => 10,
            ShipKind::Battleship => 15,
            ShipKind::Submarine => 25,
            ShipKind::Destroyer => 30,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            ShipKind::Carrier => Color::Red,
            ShipKind::Battleship => Color::Yellow,
            ShipKind::Submarine => Color::Green,
            ShipKind::Destroyer => Color::White,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipKind {
    type Err = BoardError;

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ShipKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BoardError::UnknownShipKind(needle.to_string()))
    }
}

/// A ship placed on a board, counting down the hits it can still take.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    number: usize,
    remaining_hits: usize,
}

impl Ship {
    /// New undamaged ship. `number` is its 1-based placement order.
    pub fn new(kind: ShipKind, number: usize) -> Self {
        Self {
            kind,
            number,
            remaining_hits: kind.length(),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// 1-based order in which the ship was placed.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Register one hit. Never goes below zero.
    pub fn hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, number: {}, remaining: {}/{} }}",
            self.kind,
            self.number,
            self.remaining_hits,
            self.kind.length(),
        )
    }
}
