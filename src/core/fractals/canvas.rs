use crate::core::data::point::Point;

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

#[must_use]
pub fn canvas_center() -> Point {
    Point {
        x: CANVAS_WIDTH / 2.0,
        y: CANVAS_HEIGHT / 2.0,
    }
}
