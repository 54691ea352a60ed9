use crate::core::data::point::Point;
use crate::core::fractals::canvas::canvas_center;

pub const DEFAULT_SIZE: f64 = 500.0;

// Base line sits below the centre so the peaks stay on the canvas.
const BASE_LINE_OFFSET: f64 = 130.0;

#[must_use]
pub fn default_start(size: f64) -> Point {
    let center = canvas_center();

    Point {
        x: center.x - size / 2.0,
        y: center.y + BASE_LINE_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start() {
        assert_eq!(default_start(DEFAULT_SIZE), Point::new(50.0, 430.0));
    }
}
