use battleship::{
    Player, RevealOutcome, ScoreBoard, ScoringPolicy, ShipId, ShipKind, StandardScoring, Winner,
};

#[test]
fn test_accumulates_per_player() {
    let mut scores = ScoreBoard::new();
    scores.add_score(10, Player::One);
    scores.add_score(25, Player::Two);
    scores.add_score(30, Player::One);
    assert_eq!(scores.score(Player::One), 40);
    assert_eq!(scores.score(Player::Two), 25);
    assert_eq!(scores.scores(), [40, 25]);
}

#[test]
fn test_winner() {
    let mut scores = ScoreBoard::new();
    assert_eq!(scores.winner(), Winner::Tie);
    scores.add_score(5, Player::Two);
    assert_eq!(scores.winner(), Winner::Player2);
    scores.add_score(6, Player::One);
    assert_eq!(scores.winner(), Winner::Player1);
    scores.add_score(1, Player::Two);
    assert_eq!(scores.winner(), Winner::Tie);
}

#[test]
fn test_player_numbers() {
    assert_eq!(Player::try_from(1), Ok(Player::One));
    assert_eq!(Player::try_from(2), Ok(Player::Two));
    assert_eq!(Player::try_from(3), Err(3));
    assert_eq!(Player::One.other(), Player::Two);
    assert_eq!(Player::Two.to_string(), "Player 2");
}

#[test]
fn test_standard_scoring_without_bonus() {
    let rules = StandardScoring::new(false);
    let id = ShipId(0);
    let sub = Some(ShipKind::Submarine);
    assert_eq!(rules.points(RevealOutcome::Hit(id), sub, Player::One), 25);
    assert_eq!(rules.points(RevealOutcome::Sunk(id), sub, Player::One), 50);
    assert_eq!(rules.points(RevealOutcome::Hit(id), sub, Player::Two), 25);
    assert_eq!(rules.points(RevealOutcome::Miss, None, Player::Two), 0);
}

#[test]
fn test_second_player_bonus_only_on_scoring_hits() {
    let rules = StandardScoring::new(true);
    let id = ShipId(2);
    let carrier = Some(ShipKind::Carrier);
    assert_eq!(rules.points(RevealOutcome::Hit(id), carrier, Player::One), 10);
    assert_eq!(rules.points(RevealOutcome::Hit(id), carrier, Player::Two), 15);
    assert_eq!(rules.points(RevealOutcome::Sunk(id), carrier, Player::Two), 25);
    assert_eq!(rules.points(RevealOutcome::Miss, None, Player::Two), 0);
}
