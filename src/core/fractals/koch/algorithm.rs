use crate::core::actions::generate_curve::ports::curve_algorithm::CurveAlgorithm;

/// A single side drawn left to right.
const BASE_TURNS: [f64; 1] = [0.0];

/// Turn into the peak, across its apex and back out. Negative turns point
/// up on a y-down canvas, so the peaks rise above the base line.
const PEAK_TURNS: [f64; 3] = [-60.0, 120.0, -60.0];

/// Classic Koch curve: each segment is split into thirds and the middle third
/// is replaced by the two sides of an equilateral peak.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct KochAlgorithm;

impl KochAlgorithm {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CurveAlgorithm for KochAlgorithm {
    fn base_turns(&self) -> &[f64] {
        &BASE_TURNS
    }

    fn child_size(&self, size: f64) -> f64 {
        size / 3.0
    }

    fn child_turns(&self) -> [f64; 3] {
        PEAK_TURNS
    }
}
