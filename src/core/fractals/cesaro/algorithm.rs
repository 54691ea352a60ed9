use std::f64::consts::PI;

use crate::core::actions::generate_curve::ports::curve_algorithm::CurveAlgorithm;

/// A square traversed down, right, up, left on a y-down canvas.
const SQUARE_TURNS: [f64; 4] = [90.0, -90.0, -90.0, -90.0];

/// Cesaro curve: each segment is replaced by two straight pieces with a
/// notch of apex angle `π / angle_divisor` between them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CesaroAlgorithm {
    theta: f64,
    theta_deg: f64,
}

impl CesaroAlgorithm {
    /// `angle_divisor` must be non-zero; callers pass validated parameters.
    #[must_use]
    pub fn new(angle_divisor: u32) -> Self {
        let theta = PI / f64::from(angle_divisor);

        Self {
            theta,
            theta_deg: theta * 180.0 / PI,
        }
    }
}

impl CurveAlgorithm for CesaroAlgorithm {
    fn base_turns(&self) -> &[f64] {
        &SQUARE_TURNS
    }

    fn child_size(&self, size: f64) -> f64 {
        size / (2.0 * (1.0 + (self.theta / 2.0).sin()))
    }

    fn child_turns(&self) -> [f64; 3] {
        let side_turn = -(90.0 - self.theta_deg / 2.0);

        [side_turn, 180.0 - self.theta_deg, side_turn]
    }
}
