//! Combat system: enemy generation and attack resolution math.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
