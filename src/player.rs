//! Automated target selection for driving games without a human.

use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::RevealOutcome;
use crate::game::TurnReport;

type Grid = BitGrid<u128>;

/// Chooses which cell to reveal next.
pub trait TargetSelector {
    /// Pick an untargeted `(x, y)`. `None` once every cell has been chosen.
    fn select_target(&mut self, rng: &mut SmallRng, targeted: &Grid) -> Option<(usize, usize)>;

    /// Observe the outcome of any turn, by either player.
    fn handle_turn(&mut self, _report: &TurnReport) {}
}

/// Hunt/target player: fires at random until something is hit, then works
/// through the neighbours of that hit until the ship sinks.
#[derive(Debug, Default, Clone)]
pub struct AiPlayer {
    pending: Vec<(usize, usize)>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetSelector for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, targeted: &Grid) -> Option<(usize, usize)> {
        while let Some((x, y)) = self.pending.pop() {
            if let Ok(false) = targeted.get(x, y) {
                return Some((x, y));
            }
        }
        let open: Vec<(usize, usize)> = targeted.iter_unset().collect();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }

    fn handle_turn(&mut self, report: &TurnReport) {
        match report.outcome {
            RevealOutcome::Miss => {}
            RevealOutcome::Sunk(_) => self.pending.clear(),
            RevealOutcome::Hit(_) => {
                let (x, y) = (report.x, report.y);
                // Out-of-range neighbours are dropped by the bounds check in
                // `select_target`.
                self.pending.push((x + 1, y));
                self.pending.push((x, y + 1));
                if let Some(px) = x.checked_sub(1) {
                    self.pending.push((px, y));
                }
                if let Some(py) = y.checked_sub(1) {
                    self.pending.push((x, py));
                }
            }
        }
    }
}
