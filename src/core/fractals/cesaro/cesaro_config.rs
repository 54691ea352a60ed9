use crate::core::data::point::Point;
use crate::core::fractals::canvas::canvas_center;

pub const DEFAULT_SIZE: f64 = 550.0;

/// Top-left corner of a square of `size` centred on the canvas.
#[must_use]
pub fn default_start(size: f64) -> Point {
    let center = canvas_center();
    let y_offset = size / (2.0 * (45.0_f64 / 180.0 * std::f64::consts::PI).tan());

    Point {
        x: center.x - size / 2.0,
        y: center.y - y_offset,
    }
}
