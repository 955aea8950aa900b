//! Persistence, legacy import, background saving and log setup.

pub mod legacy;
pub mod logging;
pub mod persistence;
pub mod save_worker;

pub use logging::init_logging;
pub use persistence::{data_dir, parse_snapshot, SaveError, SaveManager};
pub use save_worker::SaveWorker;
