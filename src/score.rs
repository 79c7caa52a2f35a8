//! Per-player scores and the rules that turn a reveal into points.

use core::fmt;

use crate::common::RevealOutcome;
use crate::config::{SECOND_PLAYER_BONUS, SINK_MULTIPLIER};
use crate::ship::ShipKind;

/// One of the two players sharing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn slot(self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u8> for Player {
    type Error = u8;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(other),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Tie,
    Player1,
    Player2,
}

/// Running score for both players of one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBoard {
    scores: [u32; 2],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_score(&mut self, points: u32, player: Player) {
        let slot = &mut self.scores[player.slot()];
        *slot = slot.saturating_add(points);
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.slot()]
    }

    /// Scores as `[player one, player two]`.
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn winner(&self) -> Winner {
        match self.scores[0].cmp(&self.scores[1]) {
            core::cmp::Ordering::Greater => Winner::Player1,
            core::cmp::Ordering::Less => Winner::Player2,
            core::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

/// Decides how many points a reveal is worth.
pub trait ScoringPolicy {
    /// Points for `outcome` by `player`. `kind` is the ship that was hit,
    /// `None` on a miss.
    fn points(&self, outcome: RevealOutcome, kind: Option<ShipKind>, player: Player) -> u32;
}

/// Kind points, doubled on the sinking hit, plus an optional flat bonus for
/// player two's scoring hits. Misses score nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardScoring {
    pub sink_multiplier: u32,
    pub second_player_bonus: u32,
}

impl StandardScoring {
    /// Standard rules with the second-player bonus switched on or off.
    pub fn new(second_player_bonus: bool) -> Self {
        Self {
            sink_multiplier: SINK_MULTIPLIER,
            second_player_bonus: if second_player_bonus { SECOND_PLAYER_BONUS } else { 0 },
        }
    }
}

impl Default for StandardScoring {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ScoringPolicy for StandardScoring {
    fn points(&self, outcome: RevealOutcome, kind: Option<ShipKind>, player: Player) -> u32 {
        let Some(kind) = kind else {
            return 0;
        };
        let base = match outcome {
            RevealOutcome::Miss => return 0,
            RevealOutcome::Hit(_) => kind.points(),
            RevealOutcome::Sunk(_) => kind.points() * self.sink_multiplier,
        };
        match player {
            Player::One => base,
            Player::Two => base + self.second_player_bonus,
        }
    }
}
