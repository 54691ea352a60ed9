use std::ops::RangeInclusive;

use thiserror::Error;

pub const ITERATION_RANGE: RangeInclusive<i64> = 0..=15;
pub const ANGLE_DIVISOR_RANGE: RangeInclusive<i64> = 1..=50;

const DEFAULT_ITERATIONS: i64 = 0;
const DEFAULT_ANGLE_DIVISOR: i64 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("iterations must be within 0..=15, got {value}")]
    IterationsOutOfRange { value: i64 },
    #[error("angle divisor must be within 1..=50, got {value}")]
    AngleDivisorOutOfRange { value: i64 },
}

/// Requested curve parameters, as entered by a user.
///
/// Either both values are known or the request carries no parameters at all:
/// callers hold an `Option<FractalParameters>` and [`FractalParameters::normalize`]
/// turns a missing pair into the `(0, 2)` default.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FractalParameters {
    pub iterations: i64,
    pub angle_divisor: i64,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            angle_divisor: DEFAULT_ANGLE_DIVISOR,
        }
    }
}

impl FractalParameters {
    #[must_use]
    pub const fn new(iterations: i64, angle_divisor: i64) -> Self {
        Self {
            iterations,
            angle_divisor,
        }
    }

    /// Pairs two optional inputs. A missing value drops the whole pair.
    #[must_use]
    pub fn from_inputs(iterations: Option<i64>, angle_divisor: Option<i64>) -> Option<Self> {
        Some(Self::new(iterations?, angle_divisor?))
    }

    #[must_use]
    pub fn normalize(params: Option<Self>) -> Self {
        params.unwrap_or_default()
    }

    pub fn validate(self) -> Result<BoundedParameters, ParameterError> {
        if !ITERATION_RANGE.contains(&self.iterations) {
            return Err(ParameterError::IterationsOutOfRange {
                value: self.iterations,
            });
        }

        if !ANGLE_DIVISOR_RANGE.contains(&self.angle_divisor) {
            return Err(ParameterError::AngleDivisorOutOfRange {
                value: self.angle_divisor,
            });
        }

        Ok(BoundedParameters {
            depth: self.iterations as u32,
            angle_divisor: self.angle_divisor as u32,
        })
    }
}

/// Parameters known to lie inside the engine's supported ranges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundedParameters {
    depth: u32,
    angle_divisor: u32,
}

impl BoundedParameters {
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn angle_divisor(&self) -> u32 {
        self.angle_divisor
    }
}
