use crate::wheel::Fill;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Text colors
    pub banner: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Surfaces
    pub background: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,

    // Wheel colors
    pub disc: ColorSpec,
    pub segment_primary: ColorSpec,
    pub segment_secondary: ColorSpec,
    pub segment_label: ColorSpec,
    pub rim: ColorSpec,
    pub pointer: ColorSpec,
    pub winner: ColorSpec,

    // Button and result colors
    pub button_ready: ColorSpec,
    pub button_busy: ColorSpec,
    pub button_text: ColorSpec,
    pub result: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Fill color of a wedge.
    ///
    pub fn segment_color(&self, fill: Fill) -> Color {
        match fill {
            Fill::Primary => self.segment_primary.to_color(),
            Fill::Secondary => self.segment_secondary.to_color(),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            banner: ColorSpec::rgb(255, 159, 196),      // Magenta
            text: ColorSpec::rgb(169, 177, 214),        // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),  // Comment
            background: ColorSpec::rgb(26, 27, 38),     // Background
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            disc: ColorSpec::rgb(59, 66, 97),
            segment_primary: ColorSpec::rgb(255, 158, 100), // Orange
            segment_secondary: ColorSpec::rgb(247, 118, 142), // Red
            segment_label: ColorSpec::rgb(255, 255, 255),
            rim: ColorSpec::rgb(192, 202, 245),
            pointer: ColorSpec::rgb(255, 202, 40),      // Yellow
            winner: ColorSpec::rgb(158, 206, 106),      // Green
            button_ready: ColorSpec::rgb(158, 206, 106), // Green
            button_busy: ColorSpec::rgb(86, 95, 137),
            button_text: ColorSpec::rgb(26, 27, 38),
            result: ColorSpec::rgb(158, 206, 106),      // Green
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            banner: ColorSpec::rgb(255, 121, 198),      // Pink
            text: ColorSpec::rgb(248, 248, 242),        // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),   // Comment
            background: ColorSpec::rgb(40, 42, 54),     // Background
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(98, 114, 164), // Comment
            disc: ColorSpec::rgb(73, 76, 100),
            segment_primary: ColorSpec::rgb(255, 184, 108), // Orange
            segment_secondary: ColorSpec::rgb(255, 85, 85), // Red
            segment_label: ColorSpec::rgb(248, 248, 242),
            rim: ColorSpec::rgb(248, 248, 242),
            pointer: ColorSpec::rgb(241, 250, 140),     // Yellow
            winner: ColorSpec::rgb(80, 250, 123),       // Green
            button_ready: ColorSpec::rgb(80, 250, 123), // Green
            button_busy: ColorSpec::rgb(68, 71, 90),
            button_text: ColorSpec::rgb(40, 42, 54),
            result: ColorSpec::rgb(80, 250, 123),       // Green
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            banner: ColorSpec::rgb(245, 194, 231),      // Pink
            text: ColorSpec::rgb(205, 214, 244),        // Text
            text_muted: ColorSpec::rgb(166, 173, 200),  // Subtext0
            background: ColorSpec::rgb(17, 17, 27),     // Base
            border_active: ColorSpec::rgb(203, 166, 247), // Mauve
            border_normal: ColorSpec::rgb(166, 173, 200), // Subtext0
            disc: ColorSpec::rgb(69, 71, 90),       // Surface1
            segment_primary: ColorSpec::rgb(250, 179, 135), // Peach
            segment_secondary: ColorSpec::rgb(243, 139, 168), // Red
            segment_label: ColorSpec::rgb(255, 255, 255),
            rim: ColorSpec::rgb(186, 194, 222),
            pointer: ColorSpec::rgb(249, 226, 175),     // Yellow
            winner: ColorSpec::rgb(166, 227, 161),      // Green
            button_ready: ColorSpec::rgb(166, 227, 161), // Green
            button_busy: ColorSpec::rgb(88, 91, 112),
            button_text: ColorSpec::rgb(17, 17, 27),
            result: ColorSpec::rgb(166, 227, 161),      // Green
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            banner: ColorSpec::rgb(255, 109, 146),      // Pink
            text: ColorSpec::rgb(88, 82, 96),           // Text
            text_muted: ColorSpec::rgb(152, 147, 165),  // Muted
            background: ColorSpec::rgb(250, 244, 237),  // Base
            border_active: ColorSpec::rgb(161, 119, 255), // Purple
            border_normal: ColorSpec::rgb(88, 82, 96),  // Text
            disc: ColorSpec::rgb(223, 218, 217),    // Highlight Med
            segment_primary: ColorSpec::rgb(234, 157, 52), // Gold
            segment_secondary: ColorSpec::rgb(180, 99, 122), // Love
            segment_label: ColorSpec::rgb(255, 250, 243),
            rim: ColorSpec::rgb(88, 82, 96),
            pointer: ColorSpec::rgb(255, 210, 0),       // Gold
            winner: ColorSpec::rgb(40, 105, 131),       // Pine
            button_ready: ColorSpec::rgb(40, 105, 131), // Pine
            button_busy: ColorSpec::rgb(152, 147, 165),
            button_text: ColorSpec::rgb(255, 250, 243),
            result: ColorSpec::rgb(40, 105, 131),       // Pine
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_theme() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_segment_colors_alternate() {
        let theme = Theme::default();
        assert_ne!(
            theme.segment_color(Fill::Primary),
            theme.segment_color(Fill::Secondary)
        );
        assert_eq!(
            theme.segment_color(Fill::Primary),
            Color::Rgb(255, 158, 100)
        );
    }
}
