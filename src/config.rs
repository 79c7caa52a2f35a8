use core::ops::RangeInclusive;

/// Smallest accepted board side.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 10;
/// Accepted range for either board side.
pub const BOARD_SIZE_RANGE: RangeInclusive<usize> = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;

/// Points multiplier applied to the hit that sinks a ship.
pub const SINK_MULTIPLIER: u32 = 2;
/// Flat bonus added to player two's scoring hits when the option is on.
pub const SECOND_PLAYER_BONUS: u32 = 5;

/// Anchor/kind draws allowed before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Number of entries kept by a high-score table.
pub const HIGH_SCORE_SLOTS: usize = 10;

/// Returns `true` when `size` is an accepted board side.
pub fn is_valid_board_size(size: usize) -> bool {
    BOARD_SIZE_RANGE.contains(&size)
}

/// Number of ships placed on a randomly generated `width × height` board.
pub fn random_ship_count(width: usize, height: usize) -> usize {
    (width + height) / 4
}

/// Inclusive bounds on the ship count of an `n × n` layout description.
pub fn layout_ship_count_range(n: usize) -> RangeInclusive<usize> {
    (n / 2).saturating_sub(1)..=n / 2 + 1
}
