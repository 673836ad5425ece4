pub mod arc;
pub mod radial;

pub use arc::ArcGeometry;
pub use radial::{MarkerOffset, RadialLayout};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("ring size must be greater than zero (got {0})")]
    InvalidSize(f64),
    #[error("stroke width {stroke} does not fit a ring of size {size}")]
    StrokeTooWide { size: f64, stroke: f64 },
}

pub(crate) fn finite(value: f64, field: &'static str) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field })
    }
}
