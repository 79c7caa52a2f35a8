//! Headless match between two AI players on one board. Prints a JSON summary.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use battleship::{
    init_logging, AiPlayer, Board, Game, GameConfig, GameStatus, HighScoreTable, Player,
    TargetSelector,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    source: Source,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, global = true, help = "Give player 2 a bonus on every scoring hit")]
    bonus: bool,
}

#[derive(Subcommand)]
enum Source {
    /// Place ships at random on a board of the given size.
    Random {
        #[arg(long, default_value_t = 10)]
        width: usize,
        #[arg(long, default_value_t = 10)]
        height: usize,
    },
    /// Load ship placement from a layout description file.
    Layout { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let board = match cli.source {
        Source::Random { width, height } => {
            Board::random(width, height, &mut rng).context("generating random board")?
        }
        Source::Layout { path } => Board::from_layout_file(&path)?,
    };
    let (width, height, ships) = (board.width(), board.height(), board.ship_count());

    let mut game = Game::new(
        board,
        GameConfig {
            second_player_bonus: cli.bonus,
        },
    )?;
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();

    while game.status() == GameStatus::InProgress {
        let selector: &mut dyn TargetSelector = match game.current_player() {
            Player::One => &mut p1,
            Player::Two => &mut p2,
        };
        let (x, y) = selector
            .select_target(&mut rng, game.targeted())
            .ok_or_else(|| anyhow!("no cells left to target"))?;
        let report = game.play_turn(x, y)?;
        p1.handle_turn(&report);
        p2.handle_turn(&report);
    }

    let mut high_scores = HighScoreTable::new();
    let winner = game
        .finish(&mut high_scores)
        .ok_or_else(|| anyhow!("game ended without a winner"))?;

    let result = json!({
        "board": {"width": width, "height": height, "ships": ships},
        "turns": game.turns(),
        "scores": {
            "player1": game.scores().score(Player::One),
            "player2": game.scores().score(Player::Two),
        },
        "winner": winner,
        "high_scores": high_scores,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
