use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::{Phase, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format the controls for the current phase as a display string.
///
fn controls_text(state: &State) -> String {
    let hotkeys = state.get_hotkeys();
    let log_label = if state.is_log_visible() {
        "hide log"
    } else {
        "show log"
    };
    match state.phase() {
        Phase::Idle => build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::Spin, "spin"),
                (HotkeyAction::ToggleLog, log_label),
                (HotkeyAction::Quit, "quit"),
            ],
        ),
        Phase::Spinning => build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::ToggleLog, log_label),
                (HotkeyAction::Quit, "quit"),
            ],
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let controls_text = controls_text(state);
    let (mode, mode_color) = match state.phase() {
        Phase::Idle => ("READY:", theme.button_ready.to_color()),
        Phase::Spinning => ("SPINNING:", theme.button_busy.to_color()),
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.button_text.to_color())
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.text_muted.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.text_muted.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FixedSource;
    use std::time::Instant;

    #[test]
    fn test_controls_text_hides_spin_while_spinning() {
        let mut state = State::new(Box::new(FixedSource::new(3, 5.0)));
        assert!(controls_text(&state).contains("spin"));
        state.spin(Instant::now());
        let text = controls_text(&state);
        assert!(!text.contains(": spin"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn test_controls_text_log_label() {
        let mut state = State::new(Box::new(FixedSource::new(3, 5.0)));
        assert!(controls_text(&state).contains("show log"));
        state.toggle_log();
        assert!(controls_text(&state).contains("hide log"));
    }
}
