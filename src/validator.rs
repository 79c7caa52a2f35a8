//! Pure checks on a proposed ship run.
//!
//! None of these functions fail; every violation is reported as `false`.

use alloc::vec::Vec;

use crate::common::Coord;
use crate::ship::ShipKind;

/// Every coordinate lies inside a `width × height` board.
pub fn is_within_bounds(coords: &[Coord], width: usize, height: usize) -> bool {
    coords.iter().all(|c| c.row < height && c.col < width)
}

/// All rows equal, or all columns equal.
pub fn is_single_axis_run(coords: &[Coord]) -> bool {
    is_horizontal(coords) || is_vertical(coords)
}

fn is_horizontal(coords: &[Coord]) -> bool {
    coords.windows(2).all(|w| w[0].row == w[1].row)
}

fn is_vertical(coords: &[Coord]) -> bool {
    coords.windows(2).all(|w| w[0].col == w[1].col)
}

/// The varying axis, once sorted, steps by exactly one with no repeats.
///
/// Runs that are not on a single axis are never contiguous.
pub fn is_contiguous(coords: &[Coord]) -> bool {
    if coords.is_empty() {
        return false;
    }
    let mut values: Vec<usize> = if is_horizontal(coords) {
        coords.iter().map(|c| c.col).collect()
    } else if is_vertical(coords) {
        coords.iter().map(|c| c.row).collect()
    } else {
        return false;
    };
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

/// A run of exactly `kind.length()` in-bounds, single-axis, contiguous cells.
pub fn is_valid_ship(kind: ShipKind, coords: &[Coord], width: usize, height: usize) -> bool {
    coords.len() == kind.length()
        && is_within_bounds(coords, width, height)
        && is_single_axis_run(coords)
        && is_contiguous(coords)
}
