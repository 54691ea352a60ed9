use std::f64::consts::PI;

use crate::core::data::point::Point;

/// Drawing cursor: where the next segment starts and which way it points.
///
/// Headings are in degrees, measured from the positive x axis towards the
/// positive y axis. On a y-down canvas a positive turn is clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub position: Point,
    pub heading: f64,
}

impl Pen {
    #[must_use]
    pub const fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }

    /// End point of a straight segment of `distance` along the current heading.
    #[must_use]
    pub fn advance(&self, distance: f64) -> Point {
        let radians = self.heading * PI / 180.0;

        Point {
            x: self.position.x + distance * radians.cos(),
            y: self.position.y + distance * radians.sin(),
        }
    }

    #[must_use]
    pub fn turned(self, degrees: f64) -> Self {
        Self {
            heading: self.heading + degrees,
            ..self
        }
    }

    #[must_use]
    pub fn moved_to(self, position: Point) -> Self {
        Self { position, ..self }
    }
}
