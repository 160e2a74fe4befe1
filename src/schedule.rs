//! Deferred computer replies.
//!
//! The computer's move is a cancellable scheduled task: it sleeps for
//! the configured delay, then delivers a reply tagged with the state
//! version it was computed against. A reset that beats the timer
//! aborts the task; a reply that already fired is caught by the
//! version check on delivery.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::engine::Position;

/// A computer move computed against a specific state version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerReply {
    /// Version of the state the move was computed against.
    pub version: u64,
    /// The chosen cell.
    pub position: Position,
}

/// Cancellation handle for a pending computer reply.
///
/// At most one of these exists per session at any time.
#[derive(Debug)]
pub struct ScheduledMove {
    version: u64,
    handle: JoinHandle<()>,
}

impl ScheduledMove {
    /// The state version the pending reply targets.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Cancels the pending reply if it has not fired yet.
    #[instrument(skip(self), fields(version = self.version))]
    pub fn cancel(self) {
        debug!("cancelling pending computer reply");
        self.handle.abort();
    }
}

/// Schedules `position` to be delivered on `tx` after `delay`.
#[instrument(skip(tx))]
pub fn schedule_reply(
    version: u64,
    position: Position,
    delay: Duration,
    tx: mpsc::UnboundedSender<ComputerReply>,
) -> ScheduledMove {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // A closed receiver means the session is gone; nothing to do.
        let _ = tx.send(ComputerReply { version, position });
    });

    ScheduledMove { version, handle }
}
