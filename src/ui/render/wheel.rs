use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::wheel::{geometry, Bounds, Pointer};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line},
        Block, Borders,
    },
};
use std::time::Instant;

/// Radius of the wedges in canvas units.
///
const WHEEL_RADIUS: f64 = 140.0;

/// Radius of the disc behind the wedges. The pointer rests on its edge.
///
const DISC_RADIUS: f64 = 150.0;
const DISC_STROKES: usize = 720;
const HUB_RADIUS: f64 = 12.0;
const POINTER_WIDTH: f64 = 20.0;
const POINTER_HEIGHT: f64 = 30.0;
const POINTER_ROWS: usize = 12;

/// Half extent of the canvas on the y axis: disc and pointer.
///
const HALF_EXTENT: f64 = DISC_RADIUS + POINTER_HEIGHT;

/// Radial strokes drawn per wedge to fill it.
///
const STROKES_PER_SEGMENT: usize = 4;

/// Width reserved for a label in terminal cells.
///
const LABEL_CELLS: f64 = 3.0;

/// Half extent of the canvas on the x axis so that the wheel stays round.
/// Terminal cells are about twice as tall as they are wide.
///
pub fn half_width(area: Rect) -> f64 {
    if area.height == 0 {
        return HALF_EXTENT;
    }
    HALF_EXTENT * f64::from(area.width) / (2.0 * f64::from(area.height))
}

/// Indices of the labels that fit in `area`, always including `winner`.
///
pub fn visible_labels(area: Rect, winner: Option<u8>) -> Vec<u8> {
    let units_per_cell = 2.0 * half_width(area) / f64::from(area.width.max(1));
    let stride = geometry::label_stride(WHEEL_RADIUS / units_per_cell, LABEL_CELLS);
    let mut labels: Vec<u8> = (0..geometry::SEGMENT_COUNT)
        .step_by(stride)
        .map(|index| index as u8)
        .collect();
    if let Some(winner) = winner {
        if !labels.contains(&winner) {
            labels.push(winner);
        }
    }
    labels
}

fn draw_disc(ctx: &mut Context, color: Color) {
    let step = 360.0 / DISC_STROKES as f64;
    for stroke in 0..DISC_STROKES {
        let (x2, y2) = geometry::polar_to_point(step * stroke as f64, DISC_RADIUS);
        ctx.draw(&Line {
            x1: 0.0,
            y1: 0.0,
            x2,
            y2,
            color,
        });
    }
}

fn draw_segments(ctx: &mut Context, state: &State, rotation: f64, winner: Option<u8>) {
    let theme = state.get_theme();
    for segment in geometry::segments() {
        let color = if Some(segment.index) == winner {
            theme.winner.to_color()
        } else {
            theme.segment_color(segment.fill)
        };
        let step = geometry::SEGMENT_DEGREES / STROKES_PER_SEGMENT as f64;
        for stroke in 0..STROKES_PER_SEGMENT {
            let local = segment.start_angle + step * (stroke as f64 + 0.5);
            let angle = geometry::screen_angle(local, rotation);
            let (x1, y1) = geometry::polar_to_point(angle, HUB_RADIUS);
            let (x2, y2) = geometry::polar_to_point(angle, WHEEL_RADIUS);
            ctx.draw(&Line {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }
}

fn draw_pointer(ctx: &mut Context, color: Color) {
    let bounds = Bounds {
        x: -POINTER_WIDTH / 2.0,
        y: DISC_RADIUS,
        width: POINTER_WIDTH,
        height: POINTER_HEIGHT,
    };
    for (from, to) in Pointer::fill_spans(bounds, POINTER_ROWS)
        .into_iter()
        .chain(Pointer::edges(bounds))
    {
        ctx.draw(&Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            color,
        });
    }
}

/// Render the wheel at its current visual rotation.
///
pub fn wheel(frame: &mut Frame, size: Rect, state: &State, now: Instant) {
    let theme = state.get_theme();
    let wheel = state.wheel();
    let rotation = wheel.display_angle(now);
    let winner = wheel.show_result.then_some(wheel.selected_number);

    let block = Block::default()
        .borders(Borders::NONE)
        .style(ratatui::style::Style::default().bg(theme.background.to_color()));
    let inner = block.inner(size);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let x_extent = half_width(inner);
    let units_per_cell = 2.0 * x_extent / f64::from(inner.width.max(1));
    let labels = visible_labels(inner, winner);
    let under_pointer = geometry::segment_at_pointer(rotation);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-HALF_EXTENT, HALF_EXTENT])
        .paint(|ctx| {
            draw_disc(ctx, theme.disc.to_color());
            draw_segments(ctx, state, rotation, winner);
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: DISC_RADIUS,
                color: theme.rim.to_color(),
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: HUB_RADIUS,
                color: theme.rim.to_color(),
            });

            ctx.layer();
            draw_pointer(ctx, theme.pointer.to_color());

            ctx.layer();
            for index in &labels {
                let text = geometry::Segment::new(*index).label();
                let (x, y) = geometry::label_position(*index, WHEEL_RADIUS, rotation);
                let offset = units_per_cell * text.len() as f64 / 2.0;
                let style = if Some(*index) == winner {
                    styling::winner_label_style(theme)
                } else {
                    styling::segment_label_style(theme)
                };
                ctx.print(x - offset, y, Span::styled(text, style));
            }
            ctx.print(
                -x_extent,
                HALF_EXTENT,
                Span::styled(
                    format!("▼ {:>2}", under_pointer),
                    styling::muted_text_style(theme),
                ),
            );
        });

    frame.render_widget(canvas, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FixedSource;
    use ratatui::{backend::TestBackend, Terminal};

    fn cell_colors(width: u16, height: u16) -> (State, Vec<Color>) {
        let state = State::new(Box::new(FixedSource::new(1, 5.0)));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| wheel(frame, frame.size(), &state, Instant::now()))
            .unwrap();
        let colors = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.fg)
            .collect();
        (state, colors)
    }

    #[test]
    fn test_disc_is_filled_behind_wedges() {
        let (state, colors) = cell_colors(200, 100);
        let theme = state.get_theme();
        let disc = colors
            .iter()
            .filter(|color| **color == theme.disc.to_color())
            .count();
        assert!(disc > 50);
        assert!(colors.contains(&theme.segment_color(crate::wheel::Fill::Primary)));
        assert!(colors.contains(&theme.pointer.to_color()));
    }

    #[test]
    fn test_half_width_keeps_wheel_round() {
        let area = Rect::new(0, 0, 80, 20);
        assert_eq!(half_width(area), HALF_EXTENT * 2.0);
        assert_eq!(HALF_EXTENT, 180.0);
        let square = Rect::new(0, 0, 40, 20);
        assert_eq!(half_width(square), HALF_EXTENT);
    }

    #[test]
    fn test_visible_labels_on_small_area() {
        let labels = visible_labels(Rect::new(0, 0, 40, 20), None);
        assert!(labels.len() < 100);
        assert!(labels.contains(&0));
    }

    #[test]
    fn test_visible_labels_include_winner() {
        let labels = visible_labels(Rect::new(0, 0, 40, 20), Some(37));
        assert!(labels.contains(&37));
    }

    #[test]
    fn test_visible_labels_on_large_area() {
        let labels = visible_labels(Rect::new(0, 0, 1000, 500), None);
        assert_eq!(labels.len(), 100);
    }
}
