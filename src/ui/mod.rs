//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout
//! - Theme management
//! - Widget components (spinner, big digits, styling)
//! - View rendering (header, wheel, result, button, footer, log)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
