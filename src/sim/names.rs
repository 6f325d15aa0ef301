//! Display names for leaderboard entries

use rand::Rng;

/// Names a session may be labelled with
pub const PLAYER_NAMES: [&str; 8] = [
    "Ace", "Blaze", "Comet", "Dash", "Echo", "Flick", "Nova", "Pip",
];

/// Pick a name uniformly at random
pub fn pick_name<R: Rng>(rng: &mut R) -> &'static str {
    PLAYER_NAMES[rng.random_range(0..PLAYER_NAMES.len())]
}
