use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let hints = [
        ("[← →]", " date  "),
        ("[t]", " today  "),
        ("[↑ ↓]", " select  "),
        ("[space]", " prayed  "),
        ("[a]", " alarm  "),
        ("[c]", " calendar  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::teal()));
        spans.push(Span::styled(*label, theme::ink_dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(theme::sheet());
    frame.render_widget(paragraph, area);
}
