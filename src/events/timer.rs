use super::{Event, EventSender};
use log::*;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Schedules deferred spin completions on the async runtime. The completion
/// is posted back to the UI loop as an event; state is never touched from
/// the timer task itself.
///
#[derive(Clone)]
pub struct Timer {
    tx: EventSender,
    runtime: Handle,
}

/// Handle to a scheduled completion.
///
#[derive(Debug)]
pub struct PendingCompletion {
    spin_id: u64,
    handle: JoinHandle<()>,
}

impl PendingCompletion {
    pub fn spin_id(&self) -> u64 {
        self.spin_id
    }

    /// Abort the completion before it fires.
    ///
    pub fn cancel(self) {
        debug!("Cancelling completion timer for spin #{}...", self.spin_id);
        self.handle.abort();
    }
}

impl Timer {
    /// Return new instance bound to the current runtime. Must be called from
    /// within a tokio runtime.
    ///
    pub fn new(tx: EventSender) -> Self {
        Timer::with_handle(tx, Handle::current())
    }

    pub fn with_handle(tx: EventSender, runtime: Handle) -> Self {
        Timer { tx, runtime }
    }

    /// Post `Event::SpinComplete` for `spin_id` once `delay` has elapsed.
    ///
    pub fn schedule(&self, spin_id: u64, delay: Duration) -> PendingCompletion {
        debug!(
            "Scheduling completion of spin #{} in {:?}...",
            spin_id, delay
        );
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Event::SpinComplete { spin_id }).is_err() {
                debug!("Event channel closed before spin #{} completed", spin_id);
            }
        });
        PendingCompletion { spin_id, handle }
    }
}
