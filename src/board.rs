//! Game board: ship placement, reveal tracking and game-over detection.
//!
//! A board is built once, either from a layout description or by random
//! placement, and its ships never move afterwards. Play only mutates the
//! revealed grid and each ship's remaining hit count.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, trace};
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Coord, RevealOutcome, ShipId};
use crate::config::{is_valid_board_size, random_ship_count, MAX_PLACEMENT_ATTEMPTS};
use crate::layout::LayoutDescription;
use crate::ship::{Ship, ShipKind};
use crate::validator;

type Grid = BitGrid<u128>;

/// Direction a randomly placed ship grows from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn step(self, c: Coord) -> Option<Coord> {
        match self {
            Direction::North => c.row.checked_sub(1).map(|row| Coord::new(row, c.col)),
            Direction::South => Some(Coord::new(c.row + 1, c.col)),
            Direction::East => Some(Coord::new(c.row, c.col + 1)),
            Direction::West => c.col.checked_sub(1).map(|col| Coord::new(c.row, col)),
        }
    }
}

/// Cells of a `len`-long run starting at `anchor`. `None` if it walks off
/// the top or left edge.
fn grow_run(anchor: Coord, direction: Direction, len: usize) -> Option<Vec<Coord>> {
    let mut run = Vec::with_capacity(len);
    let mut cur = anchor;
    run.push(cur);
    for _ in 1..len {
        cur = direction.step(cur)?;
        run.push(cur);
    }
    Some(run)
}

pub struct Board {
    width: usize,
    height: usize,
    ships: Vec<Ship>,
    cells: Vec<Option<ShipId>>,
    revealed: Grid,
}

impl Board {
    /// Board with no ships. Every cell starts revealed, since empty cells
    /// never need to be found.
    fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        if !is_valid_board_size(width) || !is_valid_board_size(height) {
            return Err(BoardError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            ships: Vec::new(),
            cells: vec![None; width * height],
            revealed: Grid::try_filled(width, height)?,
        })
    }

    /// Build a square board from a layout description.
    ///
    /// Ships are validated and placed in file order; the first failing ship
    /// aborts construction.
    pub fn from_description(text: &str) -> Result<Self, BoardError> {
        let layout = LayoutDescription::parse(text)?;
        let mut board = Self::empty(layout.size(), layout.size())?;

        for (ship_index, spec) in layout.ships() {
            let spec = spec?;
            if !validator::is_valid_ship(spec.kind, &spec.coords, board.width, board.height) {
                return Err(BoardError::InvalidShipShape { ship_index });
            }
            board.place(spec.kind, &spec.coords)?;
        }

        debug!(
            "built {}x{} board with {} ships from description",
            board.width,
            board.height,
            board.ships.len()
        );
        Ok(board)
    }

    /// Build a board of the given size with `(width + height) / 4` randomly
    /// placed ships.
    ///
    /// Each attempt draws an anchor cell and a kind, then tries the four
    /// growth directions in turn. Fails with `PlacementExhausted` after
    /// `MAX_PLACEMENT_ATTEMPTS` draws.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::empty(width, height)?;
        let target = random_ship_count(width, height);
        let mut attempts = 0;

        while board.ships.len() < target {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::PlacementExhausted { attempts });
            }
            attempts += 1;

            let anchor = Coord::new(rng.random_range(0..height), rng.random_range(0..width));
            let kind = ShipKind::ALL[rng.random_range(0..ShipKind::ALL.len())];

            let placed = Direction::ALL.iter().any(|&direction| {
                match grow_run(anchor, direction, kind.length()) {
                    Some(run) => {
                        validator::is_valid_ship(kind, &run, width, height)
                            && board.place(kind, &run).is_ok()
                    }
                    None => false,
                }
            });
            if !placed {
                trace!("no room for {} at {:?}, redrawing", kind, anchor);
            }
        }

        debug!(
            "placed {} ships on {}x{} board in {} attempts",
            target, width, height, attempts
        );
        Ok(board)
    }

    /// Random board seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::random(width, height, &mut rand::rng())
    }

    /// Read a layout description from disk and build a board from it.
    #[cfg(feature = "std")]
    pub fn from_layout_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading layout file {}", path.display()))?;
        Self::from_description(&text).with_context(|| format!("invalid layout in {}", path.display()))
    }

    /// Put a ship on every cell of `coords`. All cells are checked for
    /// overlap before any is written.
    fn place(&mut self, kind: ShipKind, coords: &[Coord]) -> Result<ShipId, BoardError> {
        let number = self.ships.len() + 1;
        if coords.iter().any(|c| self.cells[self.index(c.col, c.row)].is_some()) {
            return Err(BoardError::OverlappingShips { ship_index: number });
        }

        let id = ShipId(self.ships.len());
        self.ships.push(Ship::new(kind, number));
        for c in coords {
            let idx = self.index(c.col, c.row);
            self.cells[idx] = Some(id);
            self.revealed.clear(c.col, c.row)?;
        }
        debug!("placed {} #{} at {:?}", kind, number, coords);
        Ok(id)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of ships placed at construction.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Cells occupied by ship `id`, row-major.
    pub fn ship_cells(&self, id: ShipId) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Some(id))
            .map(move |(idx, _)| Coord::from_xy(idx % self.width, idx / self.width))
    }

    /// Id of the ship at column `x`, row `y`.
    pub fn ship_id_at(&self, x: usize, y: usize) -> Option<ShipId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Ship at column `x`, row `y`, or `None` for water and off-board cells.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.ship_id_at(x, y).and_then(|id| self.ship(id))
    }

    pub fn is_revealed(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(self.revealed.get(x, y)?)
    }

    /// Reveal column `x`, row `y`, hitting the ship there if any.
    ///
    /// Revealing water is always a `Miss`. Revealing a ship cell a second
    /// time is rejected so the ship is never hit twice for one cell.
    pub fn reveal(&mut self, x: usize, y: usize) -> Result<RevealOutcome, BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        let Some(id) = self.cells[self.index(x, y)] else {
            self.revealed.set(x, y)?;
            return Ok(RevealOutcome::Miss);
        };
        if self.revealed.get(x, y)? {
            return Err(BoardError::AlreadyRevealed { x, y });
        }

        self.revealed.set(x, y)?;
        let ship = &mut self.ships[id.0];
        ship.hit();
        if ship.is_sunk() {
            info!("{} #{} sunk", ship.kind(), ship.number());
            Ok(RevealOutcome::Sunk(id))
        } else {
            Ok(RevealOutcome::Hit(id))
        }
    }

    /// `true` if the cell holds a ship with no hits left.
    ///
    /// Only meaningful straight after revealing that cell: an already sunk
    /// ship keeps answering `true`.
    pub fn is_ship_sunk_this_reveal(&self, x: usize, y: usize) -> bool {
        self.ship_at(x, y).is_some_and(|s| s.is_sunk())
    }

    /// Every cell has been revealed, so every ship is sunk.
    pub fn is_game_over(&self) -> bool {
        self.revealed.is_full()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} ({} ships):", self.width, self.height, self.ships.len())?;
        for y in 0..self.height {
            for x in 0..self.width {
                let revealed = self.revealed.get(x, y).unwrap_or(false);
                let ch = match (self.cells[self.index(x, y)], revealed) {
                    (None, _) => '.',
                    (Some(_), true) => 'X',
                    (Some(id), false) => {
                        let number = self.ships[id.0].number();
                        core::char::from_digit((number % 10) as u32, 10).unwrap_or('S')
                    }
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
