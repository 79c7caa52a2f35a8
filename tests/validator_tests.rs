use battleship::validator::{is_contiguous, is_single_axis_run, is_valid_ship, is_within_bounds};
use battleship::{Coord, ShipKind};

fn run(cells: &[(usize, usize)]) -> Vec<Coord> {
    cells.iter().map(|&(r, c)| Coord::new(r, c)).collect()
}

#[test]
fn test_bounds_use_width_for_columns() {
    let cells = run(&[(0, 7), (1, 7)]);
    assert!(is_within_bounds(&cells, 8, 5));
    assert!(!is_within_bounds(&cells, 7, 5));
    assert!(!is_within_bounds(&run(&[(5, 0)]), 8, 5));
}

#[test]
fn test_single_axis() {
    assert!(is_single_axis_run(&run(&[(2, 1), (2, 2), (2, 3)])));
    assert!(is_single_axis_run(&run(&[(1, 4), (3, 4), (2, 4)])));
    assert!(is_single_axis_run(&run(&[(3, 3)])));
    assert!(!is_single_axis_run(&run(&[(0, 0), (1, 1)])));
}

#[test]
fn test_contiguous_accepts_any_order() {
    assert!(is_contiguous(&run(&[(4, 0), (2, 0), (3, 0)])));
    assert!(is_contiguous(&run(&[(1, 2), (1, 1)])));
}

#[test]
fn test_contiguous_rejects_gaps_and_repeats() {
    assert!(!is_contiguous(&run(&[(0, 0), (0, 2)])));
    assert!(!is_contiguous(&run(&[(0, 1), (0, 1), (0, 2)])));
    assert!(!is_contiguous(&run(&[(0, 0), (1, 1)])));
    assert!(!is_contiguous(&[]));
}

#[test]
fn test_valid_ship_checks_length_against_kind() {
    let three = run(&[(0, 0), (0, 1), (0, 2)]);
    assert!(is_valid_ship(ShipKind::Submarine, &three, 5, 5));
    assert!(!is_valid_ship(ShipKind::Destroyer, &three, 5, 5));
    assert!(!is_valid_ship(ShipKind::Battleship, &three, 5, 5));
}

#[test]
fn test_valid_ship_every_kind_both_axes() {
    for kind in ShipKind::ALL {
        let horizontal: Vec<_> = (0..kind.length()).map(|c| Coord::new(4, c + 1)).collect();
        let vertical: Vec<_> = (0..kind.length()).map(|r| Coord::new(r, 9)).collect();
        assert!(is_valid_ship(kind, &horizontal, 10, 10), "{kind} horizontal");
        assert!(is_valid_ship(kind, &vertical, 10, 10), "{kind} vertical");
        assert!(!is_valid_ship(kind, &vertical, 9, 10), "{kind} off the right edge");
    }
}
