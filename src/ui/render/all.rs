use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::time::Instant;

const HEADER_HEIGHT: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const LOG_WIDTH_PERCENT: u16 = 40;

/// Render the whole screen from state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let now = Instant::now();
    let size = frame.size();

    let main_area = if state.is_log_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - LOG_WIDTH_PERCENT),
                Constraint::Percentage(LOG_WIDTH_PERCENT),
            ])
            .split(size);
        log(frame, columns[1], state);
        columns[0]
    } else {
        size
    };

    let rows = main_rows(main_area, state.wheel().show_result);
    header(frame, rows[0], state);
    wheel(frame, rows[1], state, now);
    result(frame, rows[2], state);
    button(frame, rows[3], state);
    footer(frame, rows[4], state);
}

fn main_rows(area: Rect, show_result: bool) -> std::rc::Rc<[Rect]> {
    let result_height = if show_result { result::HEIGHT } else { 0 };
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(result_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area)
}
