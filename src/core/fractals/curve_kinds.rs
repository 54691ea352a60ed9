use crate::core::data::point::Point;
use crate::core::fractals::cesaro::cesaro_config;
use crate::core::fractals::koch::koch_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveKinds {
    #[default]
    Cesaro,
    Koch,
}

impl CurveKinds {
    pub const ALL: &'static [Self] = &[Self::Cesaro, Self::Koch];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cesaro => "Cesaro",
            Self::Koch => "Koch",
        }
    }

    #[must_use]
    pub const fn default_size(self) -> f64 {
        match self {
            Self::Cesaro => cesaro_config::DEFAULT_SIZE,
            Self::Koch => koch_config::DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub fn default_start(self) -> Point {
        match self {
            Self::Cesaro => cesaro_config::default_start(self.default_size()),
            Self::Koch => koch_config::default_start(self.default_size()),
        }
    }

}
