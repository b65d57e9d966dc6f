//! Large block digits for the result panel.

/// Height of a glyph in rows.
///
pub const GLYPH_HEIGHT: usize = 5;

const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Render `number` as rows of block glyphs separated by one space.
///
pub fn big_digits(number: u8) -> Vec<String> {
    let digits: Vec<usize> = number
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    (0..GLYPH_HEIGHT)
        .map(|row| {
            digits
                .iter()
                .map(|digit| DIGITS[*digit][row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
