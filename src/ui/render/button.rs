use super::Frame;
use crate::state::{Phase, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const READY_LABEL: &str = "SPIN NOW!";
pub const BUSY_LABEL: &str = "Spinning...";

/// Label shown on the button for the current phase.
///
pub fn label(state: &State) -> String {
    match state.phase() {
        Phase::Idle => format!("{} {}", spinner::READY_GLYPH, READY_LABEL),
        Phase::Spinning => format!("{} {}", spinner::frame(state), BUSY_LABEL),
    }
}

/// Render the spin button. It reads as disabled while spinning; input is
/// ignored by the controller in that phase.
///
pub fn button(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let phase = state.phase();
    let style = styling::button_style(theme, phase);
    let border_style = match phase {
        Phase::Idle => styling::active_block_border_style(theme),
        Phase::Spinning => styling::normal_block_border_style(theme),
    };

    let widget = Paragraph::new(Line::from(Span::styled(label(state), style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(widget, size);
}
