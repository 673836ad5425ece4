use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

pub const BG: Color = Color::Rgb(13, 148, 136);
pub const SHEET: Color = Color::Rgb(250, 250, 249);
pub const CARD: Color = Color::Rgb(255, 255, 255);
pub const CARD_CURRENT: Color = Color::Rgb(13, 148, 136);
pub const BORDER: Color = Color::Rgb(214, 211, 209);
pub const TEXT: Color = Color::Rgb(255, 255, 255);
pub const INK: Color = Color::Rgb(31, 41, 55);
pub const INK_DIM: Color = Color::Rgb(107, 114, 128);
pub const TEAL: Color = Color::Rgb(13, 148, 136);
pub const ORANGE: Color = Color::Rgb(249, 115, 22);
pub const FADED: Color = Color::Rgb(94, 194, 184);
pub const GREEN: Color = Color::Rgb(34, 197, 94);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn sheet() -> Style {
    Style::default().fg(INK).bg(SHEET)
}

pub fn on_teal_dim() -> Style {
    Style::default().fg(Color::Rgb(204, 251, 241))
}

pub fn ink() -> Style {
    Style::default().fg(INK)
}

pub fn ink_dim() -> Style {
    Style::default().fg(INK_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn orange() -> Style {
    Style::default().fg(ORANGE)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn card(current: bool) -> Style {
    if current {
        Style::default().fg(TEXT).bg(CARD_CURRENT)
    } else {
        Style::default().fg(INK).bg(CARD)
    }
}

/// Parses "#rrggbb" or a named colour from config, falling back to
/// `fallback` for anything ratatui does not understand.
pub fn parse_color(value: &str, fallback: Color) -> Color {
    match Color::from_str(value.trim()) {
        Ok(color) => color,
        Err(_) => {
            log::warn!("unrecognised colour '{}', using default", value);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_falls_back() {
        assert_eq!(parse_color("#f97316", Color::Reset), Color::Rgb(249, 115, 22));
        assert_eq!(parse_color("not-a-colour", ORANGE), ORANGE);
    }
}
