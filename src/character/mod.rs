//! Player character and purchasable upgrades.

pub mod player;
pub mod upgrades;

pub use player::*;
pub use upgrades::*;
