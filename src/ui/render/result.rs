use super::Frame;
use crate::state::State;
use crate::ui::widgets::{big_text, styling};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub const HEADING: &str = "🎉 RESULT 🎉";

/// Rows needed to show the result panel.
///
pub const HEIGHT: u16 = big_text::GLYPH_HEIGHT as u16 + 3;

/// Render the result panel. Draws nothing unless the result is visible.
///
pub fn result(frame: &mut Frame, size: Rect, state: &State) {
    let wheel = state.wheel();
    if !wheel.show_result {
        return;
    }
    let theme = state.get_theme();

    let mut lines = vec![Line::from(Span::styled(
        HEADING,
        styling::result_style(theme),
    ))];
    lines.extend(
        big_text::big_digits(wheel.selected_number)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, styling::normal_text_style(theme)))),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            format!(" {} ", wheel.selected_number),
            styling::active_block_title_style(),
        ))
        .title_alignment(Alignment::Center);
    let widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, size);
}
