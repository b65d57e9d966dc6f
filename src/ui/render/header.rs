use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

pub const TITLE: &str = "🎯 LUCKY WHEEL";
pub const SUBTITLE: &str = "From 0 to 99";

/// Render the title and subtitle.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let text = Text::from(vec![
        Line::from(Span::styled(TITLE, styling::banner_style(theme))),
        Line::from(Span::styled(SUBTITLE, styling::muted_text_style(theme))),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), size);
}
