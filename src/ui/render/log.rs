use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub const EMPTY_PLACEHOLDER: &str = "No log entries yet";

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(format!("Log ({})", state.log_entry_count()))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    if !state.has_log_entries() {
        let placeholder = ListItem::new(Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            styling::muted_text_style(theme),
        )));
        frame.render_widget(List::new(vec![placeholder]).block(block), size);
        return;
    }

    // Only the lines that fit inside the borders
    let visible = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .get_log_entries(visible)
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry,
                styling::normal_text_style(theme),
            )]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);

    frame.render_widget(list, size);
}
