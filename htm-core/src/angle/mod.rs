//! Angles for latitude/longitude input.
//!
//! [`Angle`] stores radians and converts on demand. Strings are parsed through
//! the [`AngleUnits`] and [`ParseAngle`] traits; ranges are checked with
//! [`validate_latitude`] and [`validate_longitude`] before a value is turned
//! into a point on the sphere.

mod parse;
mod validate;

pub use parse::{parse_dms, AngleUnits, ParseAngle};
pub use validate::{validate_latitude, validate_longitude};

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}
