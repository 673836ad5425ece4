use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::models::{Prayer, PrayerBoard, PrayerType};
use crate::tui::theme;
use crate::utils::format::{format_time, pad_to_width};

pub struct PrayerRows<'a> {
    pub prayers: &'a [Prayer],
    pub board: &'a PrayerBoard,
    pub current: PrayerType,
    pub focused_idx: usize,
    pub iqamah_offset: u32,
}

pub fn render(frame: &mut Frame, area: Rect, rows: &PrayerRows<'_>) {
    let block = Block::default()
        .title(Span::styled(" Prayers ", theme::teal().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::sheet());

    let items: Vec<ListItem> = rows
        .prayers
        .iter()
        .enumerate()
        .map(|(i, p)| row(p, i, rows))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn row<'a>(p: &'a Prayer, i: usize, rows: &PrayerRows<'_>) -> ListItem<'a> {
    let is_current = p.prayer_type == rows.current;
    let is_focused = i == rows.focused_idx;
    let base = theme::card(is_current);
    let muted = if is_current {
        theme::on_teal_dim()
    } else {
        theme::ink_dim()
    };

    let pointer = if is_focused { "› " } else { "  " };
    let name_style = if is_focused {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base.add_modifier(Modifier::BOLD)
    };

    let prayed = rows.board.is_prayed(p.prayer_type);
    let (switch, switch_style) = if prayed {
        ("[■ on ]", theme::green().add_modifier(Modifier::BOLD))
    } else {
        ("[ off□]", muted)
    };
    let alarm = rows.board.alarm(p.prayer_type);

    let line = Line::from(vec![
        Span::styled(pointer, theme::orange().add_modifier(Modifier::BOLD)),
        Span::raw(pad_to_width(p.icon(), 3)),
        Span::styled(format!("{:<9}", p.name()), name_style),
        Span::styled(format_time(p.time), base.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" +{:<4}", rows.iqamah_offset), muted),
        Span::styled("Prayed? ", muted),
        Span::styled(switch, switch_style),
        Span::raw("  "),
        Span::raw(pad_to_width(alarm.icon(), 3)),
        Span::styled(alarm.label(), muted),
    ]);

    ListItem::new(line).style(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_each_prayer_with_its_state() {
        let prayers = vec![
            Prayer {
                prayer_type: PrayerType::Fajr,
                time: NaiveTime::from_hms_opt(5, 30, 0).unwrap(),
            },
            Prayer {
                prayer_type: PrayerType::Asr,
                time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            },
        ];
        let mut board = PrayerBoard::new();
        board.toggle_prayed(PrayerType::Fajr);
        board.cycle_alarm(PrayerType::Asr);

        let rows = PrayerRows {
            prayers: &prayers,
            board: &board,
            current: PrayerType::Asr,
            focused_idx: 0,
            iqamah_offset: 10,
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal.draw(|frame| render(frame, frame.area(), &rows)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Fajr"));
        assert!(text.contains("05:30"));
        assert!(text.contains("+10"));
        assert!(text.contains("on"));
        assert!(text.contains("ring"));
        assert!(text.contains("silent"));
    }
}
