use battleship::{Color, Ship, ShipKind};

#[test]
fn test_catalog() {
    let lengths: Vec<_> = ShipKind::ALL.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 2]);
    let points: Vec<_> = ShipKind::ALL.iter().map(|k| k.points()).collect();
    assert_eq!(points, vec![10, 15, 25, 30]);
    assert_eq!(ShipKind::Carrier.color(), Color::Red);
    assert_eq!(ShipKind::Destroyer.color(), Color::White);
}

#[test]
fn test_kind_from_str() {
    assert_eq!("carrier".parse::<ShipKind>().unwrap(), ShipKind::Carrier);
    assert_eq!("BattleShip".parse::<ShipKind>().unwrap(), ShipKind::Battleship);
    assert!("cruiser".parse::<ShipKind>().is_err());
    assert_eq!(ShipKind::Submarine.to_string(), "SUBMARINE");
}

#[test]
fn test_hit_counts_down_to_sunk() {
    let mut ship = Ship::new(ShipKind::Submarine, 3);
    assert_eq!(ship.number(), 3);
    assert_eq!(ship.remaining_hits(), 3);
    ship.hit();
    ship.hit();
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
    ship.hit();
    assert_eq!(ship.remaining_hits(), 0);
}
