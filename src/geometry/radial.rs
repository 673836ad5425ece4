use std::f64::consts::PI;

use super::{GeometryError, finite};

/// Offset of a marker centre from the dial centre, screen orientation
/// (positive `y` points down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerOffset {
    pub angle: f64,
    pub x: f64,
    pub y: f64,
}

/// Places markers along a vertically squashed arc around a centre point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    pub start_angle: f64,
    pub step: f64,
    pub radius: f64,
    pub vertical_scale: f64,
    pub marker_size: f64,
}

impl Default for RadialLayout {
    /// Five markers from -0.8π to 0.8π, 0.4π apart.
    fn default() -> Self {
        Self {
            start_angle: -0.8 * PI,
            step: 0.4 * PI,
            radius: 140.0,
            vertical_scale: 0.5,
            marker_size: 40.0,
        }
    }
}

impl RadialLayout {
    /// Spreads `count` markers evenly over `span` radians starting at
    /// `start_angle`, first and last marker sitting on the span ends.
    pub fn spread(
        count: usize,
        start_angle: f64,
        span: f64,
        radius: f64,
        vertical_scale: f64,
        marker_size: f64,
    ) -> Result<Self, GeometryError> {
        let start_angle = finite(start_angle, "start angle")?;
        let span = finite(span, "span")?;
        let radius = finite(radius, "radius")?;
        let vertical_scale = finite(vertical_scale, "vertical scale")?;
        let marker_size = finite(marker_size, "marker size")?;

        let step = if count > 1 {
            span / (count - 1) as f64
        } else {
            0.0
        };

        Ok(Self {
            start_angle,
            step,
            radius,
            vertical_scale,
            marker_size,
        })
    }

    pub fn angle(&self, index: usize) -> f64 {
        self.start_angle + index as f64 * self.step
    }

    pub fn offset(&self, index: usize) -> MarkerOffset {
        let angle = self.angle(index);
        MarkerOffset {
            angle,
            x: self.radius * angle.cos(),
            y: self.radius * angle.sin() * self.vertical_scale,
        }
    }

    /// Top-left corner of marker `index` inside a `width` x `height`
    /// container, i.e. `50% + offset - marker_size / 2` on both axes.
    pub fn placement(&self, index: usize, width: f64, height: f64) -> (f64, f64) {
        let offset = self.offset(index);
        let half = self.marker_size / 2.0;
        (
            width / 2.0 + offset.x - half,
            height / 2.0 + offset.y - half,
        )
    }

    pub fn offsets(&self, count: usize) -> Vec<MarkerOffset> {
        (0..count).map(|i| self.offset(i)).collect()
    }

    /// Smallest box, centred on the dial, that holds every marker.
    pub fn extent(&self, count: usize) -> (f64, f64) {
        let half = self.marker_size / 2.0;
        self.offsets(count)
            .iter()
            .fold((0.0_f64, 0.0_f64), |(w, h), o| {
                (w.max(o.x.abs() + half), h.max(o.y.abs() + half))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn default_layout_places_five_markers() {
        let layout = RadialLayout::default();
        let middle = layout.offset(2);
        assert!(middle.angle.abs() < EPS);
        assert!((middle.x - 140.0).abs() < EPS);
        assert!(middle.y.abs() < EPS);

        let first = layout.offset(0);
        assert!((first.x - 140.0 * (-0.8 * PI).cos()).abs() < EPS);
        assert!((first.y - 70.0 * (-0.8 * PI).sin()).abs() < EPS);
    }

    #[test]
    fn outer_markers_mirror_about_the_centre_line() {
        let layout = RadialLayout::default();
        let first = layout.offset(0);
        let last = layout.offset(4);
        assert!((first.x - last.x).abs() < EPS);
        assert!((first.y + last.y).abs() < EPS);

        let second = layout.offset(1);
        let fourth = layout.offset(3);
        assert!((second.x - fourth.x).abs() < EPS);
        assert!((second.y + fourth.y).abs() < EPS);
    }

    #[test]
    fn placement_centres_the_marker_box() {
        let layout = RadialLayout::default();
        let (left, top) = layout.placement(2, 400.0, 192.0);
        assert!((left - (200.0 + 140.0 - 20.0)).abs() < EPS);
        assert!((top - (96.0 - 20.0)).abs() < EPS);
    }

    #[test]
    fn spread_reproduces_the_default_step() {
        let layout = RadialLayout::spread(5, -0.8 * PI, 1.6 * PI, 140.0, 0.5, 40.0).unwrap();
        let default = RadialLayout::default();
        for i in 0..5 {
            assert!((layout.angle(i) - default.angle(i)).abs() < EPS);
        }
    }

    #[test]
    fn spread_with_single_marker_stays_at_start() {
        let layout = RadialLayout::spread(1, 0.3, PI, 100.0, 1.0, 10.0).unwrap();
        assert_eq!(layout.step, 0.0);
        assert!((layout.angle(0) - 0.3).abs() < EPS);
        assert!(RadialLayout::spread(3, f64::INFINITY, PI, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn extent_covers_every_marker() {
        let layout = RadialLayout::default();
        let (w, h) = layout.extent(5);
        assert!((w - 160.0).abs() < EPS);
        assert!(h > 20.0 && h < 70.0 + 20.0);
    }
}
