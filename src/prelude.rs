//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, BoardError, Coord, Game, GameConfig, GameStatus, HighScoreTable, Player,
    ResultRecorder, RevealOutcome, ScoreBoard, ScoringPolicy, ShipKind, StandardScoring,
    TargetSelector, Winner,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
