//! Built-in round layouts for cadence demos

use crate::cadence::{GameRound, SlotCoordinate};

/// Get all built-in rounds
pub fn default_rounds() -> Vec<GameRound> {
    vec![round_one(), round_two(), round_three()]
}

/// Round one: specials trickle in, anticipation mid-reels
pub fn round_one() -> GameRound {
    GameRound::new("roundOne", vec![at(0, 2), at(1, 3), at(3, 4)])
}

/// Round two: two specials on the first reel, a third on the second
pub fn round_two() -> GameRound {
    GameRound::new("roundTwo", vec![at(0, 2), at(0, 3), at(1, 1)])
}

/// Round three: specials only on the last reel, no anticipation
pub fn round_three() -> GameRound {
    GameRound::new("roundThree", vec![at(4, 2), at(4, 3)])
}

fn at(column: usize, row: usize) -> SlotCoordinate {
    SlotCoordinate::new(column, row)
}
