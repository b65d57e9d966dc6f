use crate::state::Phase;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for wedge labels.
///
pub fn segment_label_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.segment_label.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the winning wedge label.
///
pub fn winner_label_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.button_text.to_color())
        .bg(theme.winner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the button style for the given phase. The button reads as
/// disabled while a spin is in flight.
///
pub fn button_style(theme: &Theme, phase: Phase) -> Style {
    match phase {
        Phase::Idle => Style::default()
            .fg(theme.button_text.to_color())
            .bg(theme.button_ready.to_color())
            .add_modifier(Modifier::BOLD),
        Phase::Spinning => Style::default()
            .fg(theme.text_muted.to_color())
            .bg(theme.button_busy.to_color())
            .add_modifier(Modifier::DIM),
    }
}

/// Return the style for the result heading and number.
///
pub fn result_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.result.to_color())
        .add_modifier(Modifier::BOLD)
}
