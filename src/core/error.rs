use thiserror::Error;

/// A command whose precondition did not hold. No state was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough energy to attack!")]
    InsufficientEnergy,

    #[error("Not enough credits for '{upgrade}' ({available}/{cost})")]
    InsufficientCredits {
        upgrade: &'static str,
        cost: u64,
        available: u64,
    },

    #[error("Level too low for this dungeon (requires {required}, you are {current})")]
    LevelTooLow { required: u32, current: u32 },

    #[error("Unknown dungeon {0}")]
    UnknownDungeon(u32),
}
