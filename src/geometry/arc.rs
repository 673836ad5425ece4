use std::f64::consts::PI;

use super::{GeometryError, finite};

/// Half-circle progress ring, described the way an SVG stroke-dash would
/// draw it: the full path is `circumference` long and the first
/// `circumference - dash_offset` of it is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Progress after clamping to `[0, 100]`.
    pub progress: f64,
    pub size: f64,
    pub stroke_width: f64,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl ArcGeometry {
    pub fn new(progress: f64, size: f64, stroke_width: f64) -> Result<Self, GeometryError> {
        let progress = finite(progress, "progress")?;
        let size = finite(size, "size")?;
        let stroke_width = finite(stroke_width, "stroke width")?;

        if size <= 0.0 {
            return Err(GeometryError::InvalidSize(size));
        }
        if stroke_width < 0.0 || stroke_width > size {
            return Err(GeometryError::StrokeTooWide {
                size,
                stroke: stroke_width,
            });
        }

        let clamped = clamp_progress(progress);
        if clamped != progress {
            log::warn!("progress {} outside 0..=100, clamped to {}", progress, clamped);
        }

        let radius = (size - stroke_width) / 2.0;
        let circumference = PI * radius;
        let dash_offset = circumference - (clamped / 100.0) * circumference;

        Ok(Self {
            progress: clamped,
            size,
            stroke_width,
            radius,
            circumference,
            dash_offset,
        })
    }

    /// Share of the path that is drawn, in `[0, 1]`.
    pub fn visible_fraction(&self) -> f64 {
        if self.circumference > 0.0 {
            (self.circumference - self.dash_offset) / self.circumference
        } else {
            self.progress / 100.0
        }
    }

    pub fn visible_length(&self) -> f64 {
        self.circumference - self.dash_offset
    }

    /// SVG path data shared by the background and foreground arcs.
    pub fn svg_path(&self) -> String {
        let half_stroke = self.stroke_width / 2.0;
        let baseline = self.size / 2.0;
        format!(
            "M {} {} A {} {} 0 0 1 {} {}",
            fmt_num(half_stroke),
            fmt_num(baseline),
            fmt_num(self.radius),
            fmt_num(self.radius),
            fmt_num(self.size - half_stroke),
            fmt_num(baseline),
        )
    }

    /// Standalone SVG with a faded background arc and a coloured arc clipped
    /// by the dash offset.
    pub fn svg(&self, color: &str) -> String {
        let path = self.svg_path();
        let width = fmt_num(self.size);
        let height = fmt_num(self.size / 2.0);
        let stroke = fmt_num(self.stroke_width);
        format!(
            concat!(
                "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" style=\"transform: rotate(180deg)\">\n",
                "  <path d=\"{d}\" fill=\"none\" stroke=\"rgba(255,255,255,0.3)\" stroke-width=\"{s}\" stroke-linecap=\"round\"/>\n",
                "  <path d=\"{d}\" fill=\"none\" stroke=\"{c}\" stroke-width=\"{s}\" stroke-linecap=\"round\" ",
                "stroke-dasharray=\"{len}\" stroke-dashoffset=\"{off}\"/>\n",
                "</svg>"
            ),
            w = width,
            h = height,
            d = path,
            s = stroke,
            c = color,
            len = fmt_num(self.circumference),
            off = fmt_num(self.dash_offset),
        )
    }

    /// Sample points covering the ring band from the start of the path up to
    /// `fraction` of its length. The half-circle is centred on the origin and
    /// opens downwards, running from the left end (angle π) over the top to
    /// the right end (angle 0), so it can be painted on a y-up canvas.
    ///
    /// `density` is the number of samples per unit of arc length and per unit
    /// of stroke width.
    pub fn band_points(&self, fraction: f64, density: f64) -> Vec<(f64, f64)> {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction <= 0.0 || density <= 0.0 {
            return Vec::new();
        }

        let half = self.stroke_width / 2.0;
        let inner = (self.radius - half).max(0.0);
        let outer = self.radius + half;
        let rings = ((outer - inner) * density).ceil().max(1.0) as usize;

        let mut points = Vec::new();
        for ring in 0..=rings {
            let r = inner + (outer - inner) * ring as f64 / rings as f64;
            let steps = (PI * r * fraction * density).ceil().max(1.0) as usize;
            for step in 0..=steps {
                let t = fraction * step as f64 / steps as f64;
                let angle = PI - t * PI;
                points.push((r * angle.cos(), r * angle.sin()));
            }
        }
        points
    }
}

pub fn clamp_progress(progress: f64) -> f64 {
    progress.clamp(0.0, 100.0)
}

fn fmt_num(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_progress_hides_the_whole_arc() {
        let arc = ArcGeometry::new(0.0, 280.0, 8.0).unwrap();
        assert!((arc.dash_offset - arc.circumference).abs() < EPS);
        assert_eq!(arc.visible_fraction(), 0.0);
    }

    #[test]
    fn full_progress_shows_the_whole_arc() {
        let arc = ArcGeometry::new(100.0, 280.0, 8.0).unwrap();
        assert!(arc.dash_offset.abs() < EPS);
        assert!((arc.visible_fraction() - 1.0).abs() < EPS);
    }

    #[test]
    fn half_progress_is_half_the_circumference() {
        let arc = ArcGeometry::new(50.0, 200.0, 100.0).unwrap();
        assert!((arc.radius - 50.0).abs() < EPS);
        assert!((arc.circumference - PI * 50.0).abs() < EPS);
        assert!((arc.dash_offset - arc.circumference / 2.0).abs() < EPS);
    }

    #[test]
    fn radius_accounts_for_stroke() {
        let arc = ArcGeometry::new(65.0, 280.0, 8.0).unwrap();
        assert!((arc.radius - 136.0).abs() < EPS);
        assert!((arc.visible_length() - 0.65 * PI * 136.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let over = ArcGeometry::new(140.0, 280.0, 8.0).unwrap();
        assert_eq!(over.progress, 100.0);
        assert!(over.dash_offset.abs() < EPS);

        let under = ArcGeometry::new(-5.0, 280.0, 8.0).unwrap();
        assert_eq!(under.progress, 0.0);
        assert!((under.dash_offset - under.circumference).abs() < EPS);
    }

    #[test]
    fn rejects_impossible_rings() {
        assert_eq!(
            ArcGeometry::new(f64::NAN, 280.0, 8.0),
            Err(GeometryError::NonFinite { field: "progress" })
        );
        assert_eq!(
            ArcGeometry::new(10.0, 0.0, 0.0),
            Err(GeometryError::InvalidSize(0.0))
        );
        assert_eq!(
            ArcGeometry::new(10.0, 20.0, 30.0),
            Err(GeometryError::StrokeTooWide {
                size: 20.0,
                stroke: 30.0
            })
        );
    }

    #[test]
    fn svg_path_matches_ring_dimensions() {
        let arc = ArcGeometry::new(30.0, 280.0, 8.0).unwrap();
        assert_eq!(arc.svg_path(), "M 4 140 A 136 136 0 0 1 276 140");
        let svg = arc.svg("#f97316");
        assert!(svg.contains("stroke=\"#f97316\""));
        assert!(svg.contains("stroke-dashoffset="));
    }

    #[test]
    fn band_points_stay_within_the_drawn_share() {
        let arc = ArcGeometry::new(50.0, 280.0, 8.0).unwrap();
        let points = arc.band_points(arc.visible_fraction(), 0.5);
        assert!(!points.is_empty());
        // The first half of the path is the left quarter: x <= 0, y >= 0.
        for (x, y) in points {
            assert!(x <= 1e-6, "x = {x}");
            assert!(y >= -1e-6, "y = {y}");
            let r = (x * x + y * y).sqrt();
            assert!(r >= 132.0 - 1e-6 && r <= 140.0 + 1e-6);
        }
        assert!(arc.band_points(0.0, 0.5).is_empty());
    }
}
