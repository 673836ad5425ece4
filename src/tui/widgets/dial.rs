use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle, Points},
    },
};
use tui_big_text::{BigText, PixelSize};

use crate::geometry::{ArcGeometry, RadialLayout};
use crate::models::Prayer;
use crate::prayer_times::DialSnapshot;
use crate::tui::theme;
use crate::utils::format::format_countdown;

pub struct DialView<'a> {
    pub outer: &'a ArcGeometry,
    pub outer_color: Color,
    pub inner: &'a ArcGeometry,
    pub inner_color: Color,
    pub layout: &'a RadialLayout,
    pub prayers: &'a [Prayer],
    pub snapshot: &'a DialSnapshot,
}

/// Canvas bounds that keep circles round on a terminal grid, where a cell is
/// about twice as tall as it is wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: [f64; 2],
    pub y: [f64; 2],
    /// Canvas units covered by one terminal column.
    pub unit: f64,
}

impl Viewport {
    pub fn fit(view: &DialView<'_>, area: Rect) -> Self {
        let (marker_w, marker_h) = view.layout.extent(view.prayers.len());
        let ring_top = (view.outer.size / 2.0).max(view.inner.size / 2.0);
        let half_w = ring_top.max(marker_w);
        let top = ring_top.max(marker_h);
        let bottom = marker_h;

        let cols = area.width.max(1) as f64;
        let rows = area.height.max(1) as f64;
        let unit = (2.0 * half_w / cols).max((top + bottom) / (2.0 * rows));

        let span_x = unit * cols;
        let span_y = unit * 2.0 * rows;
        let mid_y = (top - bottom) / 2.0;
        Self {
            x: [-span_x / 2.0, span_x / 2.0],
            y: [mid_y - span_y / 2.0, mid_y + span_y / 2.0],
            unit,
        }
    }

    /// Terminal row (relative to the area) holding canvas `y`.
    pub fn row_of(&self, y: f64, area: Rect) -> u16 {
        let ratio = (self.y[1] - y) / (self.y[1] - self.y[0]);
        let row = (ratio * area.height as f64).floor();
        row.clamp(0.0, area.height.saturating_sub(1) as f64) as u16
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &DialView<'_>) {
    if area.width < 10 || area.height < 4 {
        return;
    }
    let viewport = Viewport::fit(view, area);
    // One sample per braille dot: two dots per column.
    let density = 2.0 / viewport.unit;

    let outer_bg = view.outer.band_points(1.0, density);
    let outer_fg = view
        .outer
        .band_points(view.outer.visible_fraction(), density);
    let inner_bg = view.inner.band_points(1.0, density);
    let inner_fg = view
        .inner
        .band_points(view.inner.visible_fraction(), density);
    let markers = view.layout.offsets(view.prayers.len());
    let marker_radius = view.layout.marker_size / 2.0;

    let canvas = Canvas::default()
        .background_color(theme::BG)
        .marker(Marker::Braille)
        .x_bounds(viewport.x)
        .y_bounds(viewport.y)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &outer_bg,
                color: theme::FADED,
            });
            ctx.draw(&Points {
                coords: &inner_bg,
                color: theme::FADED,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &inner_fg,
                color: view.inner_color,
            });
            ctx.draw(&Points {
                coords: &outer_fg,
                color: view.outer_color,
            });
            ctx.layer();
            for (prayer, offset) in view.prayers.iter().zip(&markers) {
                // Screen offsets grow downwards, the canvas grows upwards.
                ctx.draw(&Circle {
                    x: offset.x,
                    y: -offset.y,
                    radius: marker_radius,
                    color: theme::ORANGE,
                });
                ctx.print(
                    offset.x - viewport.unit,
                    -offset.y,
                    Span::raw(prayer.icon()),
                );
            }
        });
    frame.render_widget(canvas, area);

    render_centre(frame, area, &viewport, view);
}

fn render_centre(frame: &mut Frame, area: Rect, viewport: &Viewport, view: &DialView<'_>) {
    let baseline = area.y + viewport.row_of(0.0, area);
    let countdown = format_countdown(view.snapshot.seconds_to_next);
    let label_style = Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD);

    let big_width = 4 * countdown.chars().count() as u16;
    let fits_big = area.width >= big_width + 2 && baseline >= area.y + 6;

    let text_height = if fits_big { 2 } else { 3 };
    let block_height = text_height + if fits_big { 4 } else { 0 };
    let top = baseline.saturating_sub(block_height).max(area.y);

    let mut lines = vec![
        Line::from(Span::styled(
            view.snapshot.current.display_name().to_uppercase(),
            label_style,
        )),
        Line::from(Span::styled("In", theme::on_teal_dim())),
    ];
    if !fits_big {
        lines.push(Line::from(Span::styled(countdown.clone(), label_style)));
    }

    let text_area = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: text_height.min(area.bottom().saturating_sub(top)),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    if fits_big {
        let big_area = Rect {
            x: area.x + (area.width - big_width) / 2,
            y: top + text_height,
            width: big_width,
            height: 4,
        };
        let big = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(label_style)
            .lines(vec![Line::from(countdown)])
            .build();
        frame.render_widget(big, big_area);
    }
}
