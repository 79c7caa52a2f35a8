use log::{debug, info};

use crate::bitgrid::BitGrid;
use crate::board::Board;
use crate::common::{BoardError, RevealOutcome};
use crate::record::ResultRecorder;
use crate::score::{Player, ScoreBoard, ScoringPolicy, StandardScoring, Winner};
use crate::ship::ShipKind;

type Grid = BitGrid<u128>;

/// Options chosen when a game is set up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Give player two a flat bonus on every scoring hit.
    pub second_player_bonus: bool,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Over(Winner),
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub player: Player,
    pub x: usize,
    pub y: usize,
    pub outcome: RevealOutcome,
    /// Kind of the ship that was hit, if any.
    pub kind: Option<ShipKind>,
    pub points: u32,
    pub ships_remaining: usize,
    pub game_over: bool,
}

/// Two players taking turns revealing cells of one shared board.
pub struct Game<P = StandardScoring> {
    board: Board,
    scores: ScoreBoard,
    policy: P,
    turn: Player,
    targeted: Grid,
    ships_remaining: usize,
    turns: usize,
    recorded: bool,
}

impl Game<StandardScoring> {
    /// Game with the standard scoring rules.
    pub fn new(board: Board, config: GameConfig) -> Result<Self, BoardError> {
        Self::with_policy(board, StandardScoring::new(config.second_player_bonus))
    }
}

impl<P: ScoringPolicy> Game<P> {
    /// Game scored by a custom policy. Player one moves first.
    pub fn with_policy(board: Board, policy: P) -> Result<Self, BoardError> {
        let targeted = Grid::try_new(board.width(), board.height())?;
        let ships_remaining = board.ships_afloat();
        Ok(Self {
            board,
            scores: ScoreBoard::new(),
            policy,
            turn: Player::One,
            targeted,
            ships_remaining,
            turns: 0,
            recorded: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Turns played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Cells either player has already chosen.
    pub fn targeted(&self) -> &Grid {
        &self.targeted
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_game_over() {
            GameStatus::Over(self.scores.winner())
        } else {
            GameStatus::InProgress
        }
    }

    /// Reveal column `x`, row `y` for the current player, score it and pass
    /// the turn.
    ///
    /// A cell may be chosen once per game, by either player.
    pub fn play_turn(&mut self, x: usize, y: usize) -> Result<TurnReport, BoardError> {
        if self.board.is_game_over() {
            return Err(BoardError::GameOver);
        }
        if x >= self.board.width() || y >= self.board.height() {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.targeted.get(x, y)? {
            return Err(BoardError::AlreadyRevealed { x, y });
        }

        let player = self.turn;
        let outcome = self.board.reveal(x, y)?;
        self.targeted.set(x, y)?;
        self.turns += 1;

        let kind = self.board.ship_at(x, y).map(|s| s.kind());
        let points = self.policy.points(outcome, kind, player);
        self.scores.add_score(points, player);

        if self.board.is_ship_sunk_this_reveal(x, y) {
            self.ships_remaining = self.ships_remaining.saturating_sub(1);
            if let Some(kind) = kind {
                info!("The {} has sunk! {} ships left", kind, self.ships_remaining);
            }
        }
        debug!("{} revealed ({}, {}): {:?}, +{} points", player, x, y, outcome, points);

        let game_over = self.board.is_game_over();
        if game_over {
            info!(
                "game over after {} turns, scores {:?}, winner {:?}",
                self.turns,
                self.scores.scores(),
                self.scores.winner()
            );
        }
        self.turn = player.other();

        Ok(TurnReport {
            player,
            x,
            y,
            outcome,
            kind,
            points,
            ships_remaining: self.ships_remaining,
            game_over,
        })
    }

    /// Hand the final scores to `recorder` once the game is over.
    ///
    /// Returns the winner, or `None` while the game is still running.
    /// Scores are recorded only on the first call.
    pub fn finish<R: ResultRecorder + ?Sized>(&mut self, recorder: &mut R) -> Option<Winner> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Over(winner) => {
                if !self.recorded {
                    recorder.record_result(&self.scores);
                    self.recorded = true;
                }
                Some(winner)
            }
        }
    }
}
