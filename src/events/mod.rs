//! Event handling module.
//!
//! All events reach the UI loop through a single channel:
//! - Terminal events: key input and render ticks
//! - Timer events: deferred completion of a spin
//! - Input failure: the terminal can no longer be read

pub mod terminal;
pub mod timer;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

/// Specify different event types delivered to the UI loop.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(KeyEvent),
    Tick,
    SpinComplete { spin_id: u64 },
    InputFailed(String),
}

pub type EventSender = mpsc::UnboundedSender<Event>;
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

/// Return a connected sender and receiver pair.
///
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
