use thiserror::Error;

use crate::core::data::point::Point;
use crate::core::fractals::curve_kinds::CurveKinds;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum SessionConfigError {
    #[error("curve size must be finite and greater than zero, got {size}")]
    InvalidSize { size: f64 },
    #[error("curve start must be finite, got ({x}, {y})")]
    InvalidStart { x: f64, y: f64 },
}

/// What a session draws and where on the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionConfig {
    curve: CurveKinds,
    start: Point,
    size: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_curve(CurveKinds::default())
    }
}

impl SessionConfig {
    pub fn new(curve: CurveKinds, start: Point, size: f64) -> Result<Self, SessionConfigError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(SessionConfigError::InvalidSize { size });
        }

        if !start.is_finite() {
            return Err(SessionConfigError::InvalidStart {
                x: start.x,
                y: start.y,
            });
        }

        Ok(Self { curve, start, size })
    }

    /// The curve at its default canvas position and size.
    #[must_use]
    pub fn for_curve(curve: CurveKinds) -> Self {
        Self {
            curve,
            start: curve.default_start(),
            size: curve.default_size(),
        }
    }

    #[must_use]
    pub fn curve(&self) -> CurveKinds {
        self.curve
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }
}
