//! Item system: types, equipment, generation, and loot drops.

pub mod drops;
pub mod equipment;
pub mod generation;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use generation::*;
pub use types::*;
