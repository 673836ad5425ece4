use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, clock: NaiveDateTime) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("  salat", theme::bold()),
        Span::styled("·dial", theme::on_teal_dim()),
        Span::styled(
            format!("   {}", clock.format("%H:%M:%S")),
            theme::on_teal_dim().add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(theme::base());

    let settings = Paragraph::new(Line::from(vec![
        Span::styled("⚙ ", theme::bold()),
        Span::styled("[s] settings  ", theme::on_teal_dim()),
    ]))
    .alignment(Alignment::Right)
    .style(theme::base());

    frame.render_widget(title, halves[0]);
    frame.render_widget(settings, halves[1]);
}
