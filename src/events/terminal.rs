use super::{Event, EventReceiver, EventSender};
use crate::config::HotkeyAction;
use crate::state::State;
use anyhow::{anyhow, Result};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{io, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Wait up to `timeout` for the next terminal event.
///
fn read_terminal(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Spawn the input polling thread. Key presses and ticks are posted to `tx`
/// until the receiving side goes away or the terminal can no longer be read.
///
pub fn spawn_input_thread(tx: EventSender) {
    thread::spawn(move || forward_input(&tx, read_terminal));
}

/// Forward key presses and ticks from `read` to `tx`. A read error is posted
/// as `Event::InputFailed` and ends the loop.
///
fn forward_input<F>(tx: &EventSender, mut read: F)
where
    F: FnMut(Duration) -> io::Result<Option<CrosstermEvent>>,
{
    let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
    loop {
        let input = match read(tick_rate) {
            Ok(Some(CrosstermEvent::Key(key))) if key.kind != KeyEventKind::Release => {
                Some(Event::Input(key))
            }
            Ok(_) => None,
            Err(e) => {
                error!("Failed to read terminal events: {}", e);
                let _ = tx.send(Event::InputFailed(e.to_string()));
                break;
            }
        };
        if let Some(input) = input {
            if tx.send(input).is_err() {
                break;
            }
        }
        if tx.send(Event::Tick).is_err() {
            break;
        }
    }
}

/// Specify struct for applying events to state.
///
pub struct Handler {
    rx: EventReceiver,
}

impl Handler {
    /// Return new instance reading from `rx`.
    ///
    pub fn new(rx: EventReceiver) -> Self {
        Handler { rx }
    }

    /// Receive next event and handle it accordingly. Returns result with
    /// value true if should continue or false if exit was requested.
    ///
    pub async fn handle_next(&mut self, state: &mut State) -> Result<bool> {
        let event = self
            .rx
            .recv()
            .await
            .ok_or(anyhow!("Event channel closed"))?;
        if let Event::InputFailed(message) = &event {
            return Err(anyhow!("Terminal input failed: {}", message));
        }
        Ok(handle(event, state))
    }
}

/// Apply a single event to state. Returns false if exit was requested.
///
pub fn handle(event: Event, state: &mut State) -> bool {
    match event {
        Event::Tick => {
            state.advance_spinner_index();
            true
        }
        Event::SpinComplete { spin_id } => {
            debug!("Processing spin completion event for spin #{}...", spin_id);
            state.complete_spin(spin_id);
            true
        }
        Event::Input(key) => handle_key(key, state),
        Event::InputFailed(message) => {
            error!("Terminal input failed: {}", message);
            false
        }
    }
}

fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    match state.get_hotkeys().action_for(&key) {
        Some(HotkeyAction::Spin) => {
            debug!("Processing spin terminal event '{:?}'...", key);
            state.spin(Instant::now());
        }
        Some(HotkeyAction::ToggleLog) => {
            debug!("Processing toggle log terminal event '{:?}'...", key);
            state.toggle_log();
        }
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        None => (),
    }
    true
}
