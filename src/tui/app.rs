use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::geometry::{ArcGeometry, RadialLayout};
use crate::models::{DateCursor, PrayerBoard};
use crate::prayer_times::{DialSnapshot, PrayerSchedule, mock_snapshot};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{calendar, date_selector, dial, header, prayers, statusbar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    None,
    Help,
    Settings,
    Calendar,
}

/// Rings and markers as currently drawn.
#[derive(Debug, Clone)]
pub struct DialState {
    pub snapshot: DialSnapshot,
    pub outer: ArcGeometry,
    pub inner: ArcGeometry,
    pub layout: RadialLayout,
}

pub struct App {
    pub config: AppConfig,
    pub schedule: PrayerSchedule,
    pub overlay: Overlay,
    pub focus_idx: usize,
    pub should_quit: bool,

    pub board: PrayerBoard,
    pub date: DateCursor,
    pub clock: NaiveDateTime,
    pub dial: DialState,
    /// Ring colours, parsed once from `[dial]`.
    pub outer_color: Color,
    pub inner_color: Color,
    pub config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: AppConfig, now: NaiveDateTime) -> Result<Self> {
        let schedule = PrayerSchedule::from_config(&config.schedule)?;
        let dial = build_dial(&config, &schedule, now)?;
        let outer_color = theme::parse_color(&config.dial.outer.color, theme::ORANGE);
        let inner_color = theme::parse_color(&config.dial.inner.color, theme::FADED);

        Ok(App {
            schedule,
            overlay: Overlay::None,
            focus_idx: 0,
            should_quit: false,
            board: PrayerBoard::new(),
            date: DateCursor::new(now.date()),
            clock: now,
            dial,
            outer_color,
            inner_color,
            config,
            config_path: None,
        })
    }

    /// Refresh the clock, and the dial when it follows the clock.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.clock = now;
        if !self.config.dial.live {
            return;
        }
        match build_dial(&self.config, &self.schedule, now) {
            Ok(dial) => self.dial = dial,
            Err(e) => log::warn!("dial refresh failed: {:#}", e),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.overlay {
            Overlay::None => self.handle_dashboard_key(key),
            Overlay::Calendar => self.handle_calendar_key(key),
            Overlay::Help | Overlay::Settings => self.overlay = Overlay::None,
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.overlay = Overlay::Help,
            KeyCode::Char('s') => self.overlay = Overlay::Settings,
            KeyCode::Char('c') => self.overlay = Overlay::Calendar,
            KeyCode::Left | KeyCode::Char('h') => {
                self.date.prev();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.date.next();
            }
            KeyCode::Char('t') => self.date.reset(self.clock.date()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_idx = self.focus_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.schedule.prayers().len().saturating_sub(1);
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(p) = self.schedule.prayers().get(self.focus_idx) {
                    self.board.toggle_prayed(p.prayer_type);
                }
            }
            KeyCode::Char('a') => {
                if let Some(p) = self.schedule.prayers().get(self.focus_idx) {
                    self.board.cycle_alarm(p.prayer_type);
                }
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.date.prev();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.date.next();
            }
            _ => self.overlay = Overlay::None,
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);

        match self.overlay {
            Overlay::None => {}
            Overlay::Help => self.draw_help_overlay(frame),
            Overlay::Settings => self.draw_settings_overlay(frame),
            Overlay::Calendar => calendar::render(frame, frame.area(), self.date.selected()),
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(8),    // dial
                Constraint::Length(4), // date selector
                Constraint::Length(7), // prayers
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, chunks[0], self.clock);

        dial::render(
            frame,
            chunks[1],
            &dial::DialView {
                outer: &self.dial.outer,
                outer_color: self.outer_color,
                inner: &self.dial.inner,
                inner_color: self.inner_color,
                layout: &self.dial.layout,
                prayers: self.schedule.prayers(),
                snapshot: &self.dial.snapshot,
            },
        );

        date_selector::render(
            frame,
            chunks[2],
            self.date.selected(),
            &self.config.calendar.hijri_label,
        );

        prayers::render(
            frame,
            chunks[3],
            &prayers::PrayerRows {
                prayers: self.schedule.prayers(),
                board: &self.board,
                current: self.dial.snapshot.current,
                focused_idx: self.focus_idx,
                iqamah_offset: self.schedule.iqamah_offset(),
            },
        );

        statusbar::render(frame, chunks[4]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered(frame.area());
        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [← →] h l    ", "Previous / next day"),
            ("  [t]          ", "Back to today"),
            ("  [c]          ", "Open calendar"),
            ("  [↑ ↓] k j    ", "Select prayer"),
            ("  [space]      ", "Toggle prayed"),
            ("  [a]          ", "Cycle alarm: silent, ring, vibrate"),
            ("  [s]          ", "Settings"),
            ("  [?]          ", "Toggle help"),
            ("  [Esc] [q]    ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::teal().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(bindings.iter().map(|(key, label)| {
            Line::from(vec![
                Span::styled(*key, theme::teal()),
                Span::styled(*label, theme::ink_dim()),
            ])
        }));

        let block = Block::default()
            .title(Span::styled(" Help ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::teal())
            .style(theme::sheet());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_settings_overlay(&self, frame: &mut Frame) {
        let popup_area = centered(frame.area());
        frame.render_widget(Clear, popup_area);

        let dial = &self.config.dial;
        let path = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults (no file)".to_string());

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {:<16}", label), theme::ink_dim()),
                Span::styled(value, theme::ink()),
            ])
        };
        let ring = |r: &crate::config::settings::RingConfig| {
            format!("size {}  stroke {}  {}", r.size, r.stroke_width, r.color)
        };

        let lines = vec![
            Line::from(""),
            row("Mode", if dial.live { "live clock" } else { "mock values" }.to_string()),
            row("Outer ring", ring(&dial.outer)),
            row("Inner ring", ring(&dial.inner)),
            row(
                "Markers",
                format!(
                    "radius {}  marker {}",
                    self.config.markers.radius, self.config.markers.marker_size
                ),
            ),
            row("Tick", format!("{} ms", self.config.ui.tick_rate_ms)),
            row("Prayed today", format!("{}/5", self.board.prayed_count())),
            Line::from(""),
            row("Config file", path),
            Line::from(""),
            Line::from(Span::styled("  [any key] close", theme::ink_dim())),
        ];

        let block = Block::default()
            .title(Span::styled(" Settings ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::teal())
            .style(theme::sheet());

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn build_dial(config: &AppConfig, schedule: &PrayerSchedule, now: NaiveDateTime) -> Result<DialState> {
    let snapshot = if config.dial.live {
        schedule
            .snapshot_at(now.time())
            .context("Schedule has no prayers")?
    } else {
        mock_snapshot(&config.dial)?
    };

    let outer = ArcGeometry::new(
        snapshot.day_progress,
        config.dial.outer.size,
        config.dial.outer.stroke_width,
    )
    .context("Invalid [dial.outer] ring")?;
    let inner = ArcGeometry::new(
        snapshot.next_prayer_progress,
        config.dial.inner.size,
        config.dial.inner.stroke_width,
    )
    .context("Invalid [dial.inner] ring")?;
    let layout = config
        .markers
        .layout(schedule.prayers().len())
        .context("Invalid [markers] layout")?;

    Ok(DialState {
        snapshot,
        outer,
        inner,
        layout,
    })
}

/// The middle half of `area` on both axes.
fn centered(area: Rect) -> Rect {
    Rect {
        x: area.x + area.width / 4,
        y: area.y + area.height / 4,
        width: area.width - 2 * (area.width / 4),
        height: area.height - 2 * (area.height / 4),
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, config_path: Option<PathBuf>) -> Result<()> {
    let tick_rate = config.ui.tick_rate_ms;
    let mut app = App::new(config, Local::now().naive_local())?;
    app.config_path = config_path;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        break;
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(Local::now().naive_local()),
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlarmType, PrayerType};
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 17)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn mock_dial_by_default() {
        let app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        assert_eq!(app.dial.snapshot.current, PrayerType::Asr);
        assert_eq!(app.dial.outer.progress, 65.0);
        assert_eq!(app.dial.inner.progress, 30.0);
    }

    #[test]
    fn live_dial_follows_the_clock() {
        let mut config = AppConfig::default();
        config.dial.live = true;
        let mut app = App::new(config, at(9, 0)).unwrap();
        assert_eq!(app.dial.snapshot.current, PrayerType::Fajr);

        app.tick(at(19, 0));
        assert_eq!(app.dial.snapshot.current, PrayerType::Maghrib);
        assert_eq!(app.dial.snapshot.next, PrayerType::Isha);
        assert_eq!(app.clock, at(19, 0));
    }

    #[test]
    fn keys_toggle_focused_prayer() {
        let mut app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));

        assert!(app.board.is_prayed(PrayerType::Dhuhr));
        assert!(!app.board.is_prayed(PrayerType::Fajr));
        assert_eq!(app.board.alarm(PrayerType::Dhuhr), AlarmType::Vibrate);
    }

    #[test]
    fn focus_stays_within_the_list() {
        let mut app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focus_idx, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focus_idx, 4);
    }

    #[test]
    fn date_navigation_and_today() {
        let mut app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        let today = app.date.selected();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.date.selected(), today.succ_opt().unwrap());
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.date.selected(), today);
    }

    #[test]
    fn overlays_close_on_any_key() {
        let mut app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.overlay, Overlay::Settings);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.overlay, Overlay::None);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.overlay, Overlay::Calendar);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::None);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ring_colours_are_parsed_once() {
        let mut config = AppConfig::default();
        config.dial.live = true;
        config.dial.outer.color = "not-a-colour".to_string();
        let mut app = App::new(config, at(9, 0)).unwrap();
        assert_eq!(app.outer_color, theme::ORANGE);
        assert_eq!(app.inner_color, Color::Rgb(59, 130, 246));

        app.tick(at(19, 0));
        assert_eq!(app.outer_color, theme::ORANGE);
    }

    fn draw_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn roomy_dial_draws_big_countdown() {
        let app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        let text = draw_text(&app, 100, 40);
        assert!(text.contains("ASR"));
        assert!(text.contains("Isha"));
        // The countdown is drawn as block glyphs, not as plain digits.
        assert!(!text.contains("02:15"));
    }

    #[test]
    fn cramped_dial_falls_back_to_plain_countdown() {
        let app = App::new(AppConfig::default(), at(9, 0)).unwrap();
        let text = draw_text(&app, 60, 21);
        assert!(text.contains("ASR"));
        assert!(text.contains("02:15"));
    }

    #[test]
    fn every_view_draws_at_any_size() {
        let mut config = AppConfig::default();
        for live in [false, true] {
            config.dial.live = live;
            let mut app = App::new(config.clone(), at(9, 0)).unwrap();
            for overlay in [
                Overlay::None,
                Overlay::Help,
                Overlay::Settings,
                Overlay::Calendar,
            ] {
                app.overlay = overlay;
                for (w, h) in [(1, 1), (10, 5), (40, 12), (80, 24), (250, 80)] {
                    draw_text(&app, w, h);
                }
            }
        }
    }

    #[test]
    fn bad_ring_config_is_reported() {
        let mut config = AppConfig::default();
        config.dial.outer.stroke_width = 500.0;
        assert!(App::new(config, at(9, 0)).is_err());
    }
}
