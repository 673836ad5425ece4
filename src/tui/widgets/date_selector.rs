use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme;
use crate::utils::format::format_long_date;

pub fn render(frame: &mut Frame, area: Rect, date: NaiveDate, hijri_label: &str) {
    let button = Style::default()
        .fg(theme::TEXT)
        .bg(theme::TEAL)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("‹ ", theme::teal().add_modifier(Modifier::BOLD)),
            Span::styled("[←]", theme::ink_dim()),
            Span::raw("     "),
            Span::styled(
                format_long_date(date),
                theme::ink().add_modifier(Modifier::BOLD),
            ),
            Span::raw("     "),
            Span::styled("[→]", theme::ink_dim()),
            Span::styled(" ›", theme::teal().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(hijri_label, theme::ink_dim())),
        Line::from(""),
        Line::from(Span::styled("  📅 Open Calendar [c]  ", button)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(theme::sheet());
    frame.render_widget(paragraph, area);
}
