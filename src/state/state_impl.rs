use super::random::SpinSource;
use super::spin::{Phase, SpinController, SpinOutcome, WheelState, SPIN_DURATION};
use crate::config::Hotkeys;
use crate::events::timer::{PendingCompletion, Timer};
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::time::Instant;

/// Houses data representative of application state.
///
/// Owned by the UI loop; the renderer only ever borrows it.
pub struct State {
    controller: SpinController,
    timer: Option<Timer>,
    pending_completion: Option<PendingCompletion>,
    spinner_index: usize,
    log_visible: bool,
    log_buffer: LogBuffer,
    theme: Theme,
    hotkeys: Hotkeys,
}

impl State {
    /// Return new idle state drawing spins from `source`. Without a timer
    /// spins are never completed automatically.
    ///
    pub fn new(source: Box<dyn SpinSource>) -> Self {
        State {
            controller: SpinController::new(source),
            timer: None,
            pending_completion: None,
            spinner_index: 0,
            log_visible: false,
            log_buffer: LogBuffer::new(),
            theme: Theme::default(),
            hotkeys: Hotkeys::default(),
        }
    }

    pub fn with_timer(mut self, timer: Timer) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_hotkeys(mut self, hotkeys: Hotkeys) -> Self {
        self.hotkeys = hotkeys;
        self
    }

    pub fn with_log_buffer(mut self, log_buffer: LogBuffer) -> Self {
        self.log_buffer = log_buffer;
        self
    }

    /// Start a spin and schedule its completion. Ignored while spinning.
    ///
    pub fn spin(&mut self, now: Instant) -> Option<SpinOutcome> {
        let outcome = self.controller.spin(now)?;
        match &self.timer {
            Some(timer) => {
                self.pending_completion = Some(timer.schedule(outcome.spin_id, SPIN_DURATION));
            }
            None => warn!("No timer set; spin #{} will not complete", outcome.spin_id),
        }
        Some(outcome)
    }

    /// Apply the deferred completion of a spin.
    ///
    pub fn complete_spin(&mut self, spin_id: u64) -> bool {
        if self
            .pending_completion
            .as_ref()
            .is_some_and(|pending| pending.spin_id() == spin_id)
        {
            self.pending_completion = None;
        }
        self.controller.complete(spin_id)
    }

    /// Abort the in-flight spin and its completion timer.
    ///
    pub fn cancel_spin(&mut self) -> bool {
        if let Some(pending) = self.pending_completion.take() {
            pending.cancel();
        }
        self.controller.cancel()
    }

    pub fn wheel(&self) -> &WheelState {
        self.controller.state()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn current_spin_id(&self) -> u64 {
        self.controller.current_spin_id()
    }

    pub fn has_pending_completion(&self) -> bool {
        self.pending_completion.is_some()
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn has_log_entries(&self) -> bool {
        !self.log_buffer.is_empty()
    }

    pub fn log_entry_count(&self) -> usize {
        self.log_buffer.len()
    }

    /// Return the most recent log entries, oldest first.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.recent(count)
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }
}
