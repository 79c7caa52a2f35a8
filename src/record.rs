//! Where finished games report their final scores.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::HIGH_SCORE_SLOTS;
use crate::score::{Player, ScoreBoard};

/// Receives the final scores of a finished game.
pub trait ResultRecorder {
    fn record_result(&mut self, scores: &ScoreBoard);
}

/// Recorder that forgets everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecord;

impl ResultRecorder for NoRecord {
    fn record_result(&mut self, _scores: &ScoreBoard) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

/// The best scores seen so far, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    /// Insert one score, keeping at most `HIGH_SCORE_SLOTS` entries.
    /// Equal scores keep their arrival order.
    pub fn insert(&mut self, name: impl Into<String>, score: u32) {
        let pos = self.entries.partition_point(|e| e.score >= score);
        if pos >= HIGH_SCORE_SLOTS {
            return;
        }
        self.entries.insert(
            pos,
            HighScore {
                name: name.into(),
                score,
            },
        );
        self.entries.truncate(HIGH_SCORE_SLOTS);
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

impl ResultRecorder for HighScoreTable {
    fn record_result(&mut self, scores: &ScoreBoard) {
        for player in [Player::One, Player::Two] {
            self.insert(alloc::format!("{}", player), scores.score(player));
        }
    }
}
