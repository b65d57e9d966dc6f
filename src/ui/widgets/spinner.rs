use crate::state::State;

/// Frames of the busy indicator, advanced once per tick.
///
pub const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Glyph shown on the button while idle.
///
pub const READY_GLYPH: &str = "▶";

/// Return the spinner frame for the current state.
///
pub fn frame(state: &State) -> &'static str {
    FRAMES[*state.get_spinner_index() % FRAMES.len()]
}
