//! Background writer for autosave snapshots.

use std::io;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tracing::warn;

use super::persistence::SaveManager;
use crate::core::game_state::Snapshot;

/// Owns a thread that writes every submitted snapshot in order.
///
/// Submitting never blocks the game loop. Write failures are logged and the
/// session carries on. Dropping the worker drains the queue and joins.
pub struct SaveWorker {
    sender: Option<Sender<Snapshot>>,
    handle: Option<JoinHandle<()>>,
}

impl SaveWorker {
    pub fn spawn(manager: SaveManager) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Snapshot>();

        let handle = thread::Builder::new()
            .name("save-worker".to_string())
            .spawn(move || {
                for snapshot in receiver {
                    if let Err(e) = manager.save(&snapshot) {
                        warn!(error = %e, path = %manager.path().display(), "autosave failed");
                    }
                }
            })?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    pub fn submit(&self, snapshot: Snapshot) {
        let sent = self
            .sender
            .as_ref()
            .map(|sender| sender.send(snapshot).is_ok())
            .unwrap_or(false);
        if !sent {
            warn!("save worker is gone, snapshot dropped");
        }
    }

    /// Waits for queued snapshots to be written.
    pub fn shutdown(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("save worker panicked");
            }
        }
    }
}

impl Drop for SaveWorker {
    fn drop(&mut self) {
        self.finish();
    }
}
