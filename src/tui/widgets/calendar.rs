use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::tui::theme;

/// Weeks of `date`'s month, Monday first. `None` pads days outside the month.
pub fn month_grid(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(first);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = lead;
    for day in 1..=days {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

pub fn render(frame: &mut Frame, area: Rect, selected: NaiveDate) {
    let width = 30.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", selected.format("%B %Y")),
            theme::teal().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(" Mo Tu We Th Fr Sa Su", theme::ink_dim())),
    ];

    let highlight = Style::default()
        .fg(theme::TEXT)
        .bg(theme::TEAL)
        .add_modifier(Modifier::BOLD);
    for week in month_grid(selected) {
        let mut spans = vec![Span::raw(" ")];
        for day in week {
            match day {
                Some(d) if d == selected.day() => {
                    spans.push(Span::styled(format!("{:>2}", d), highlight));
                }
                Some(d) => spans.push(Span::styled(format!("{:>2}", d), theme::ink())),
                None => spans.push(Span::raw("  ")),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" [← →] day  [any] close", theme::ink_dim())));

    let block = Block::default()
        .title(Span::styled(" Calendar ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal())
        .style(theme::sheet());

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_on_the_right_weekday() {
        // 1 November 2024 was a Friday.
        let grid = month_grid(NaiveDate::from_ymd_opt(2024, 11, 17).unwrap());
        assert_eq!(grid[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[4][5], Some(30));
    }

    #[test]
    fn february_of_a_leap_year_has_29_days() {
        let grid = month_grid(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        let days: Vec<u32> = grid.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&29));
    }
}
