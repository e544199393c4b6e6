//! Angle parsing for latitude/longitude input.
//!
//! Three notations are accepted:
//!
//! ```text
//! Decimal:          45.5   -120.25
//! Colon-separated:  45:30:15   -5:22:30.5
//! Markers:          +38d47m01s   45d 30' 15"
//! ```
//!
//! A sign is only valid in front of the leading field: `-5:22:30` parses,
//! `5:-22:30` does not.
//!
//! ```
//! use htm_core::angle::{AngleUnits, ParseAngle};
//!
//! let lat = "-5:22:30".dms().unwrap();
//! let lon = "83.633".deg().unwrap();
//! let auto = "+38d47m01s".to_angle().unwrap();
//! assert!(lat.degrees() < 0.0 && lon.degrees() > 0.0);
//! assert!(auto.degrees() > 38.0);
//! ```

use super::Angle;
use crate::{GeometryError, GeometryResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Parse strings as angles in an explicitly named unit.
pub trait AngleUnits {
    /// Decimal degrees.
    fn deg(&self) -> GeometryResult<Angle>;
    /// Radians.
    fn rad(&self) -> GeometryResult<Angle>;
    /// Degrees-minutes-seconds.
    fn dms(&self) -> GeometryResult<Angle>;
}

impl AngleUnits for str {
    #[inline]
    fn deg(&self) -> GeometryResult<Angle> {
        parse_decimal(self).map(Angle::from_degrees)
    }

    #[inline]
    fn rad(&self) -> GeometryResult<Angle> {
        parse_decimal(self).map(Angle::from_radians)
    }

    #[inline]
    fn dms(&self) -> GeometryResult<Angle> {
        parse_dms(self)
    }
}

/// Parse an angle of unknown notation: DMS first, then decimal degrees.
pub trait ParseAngle {
    fn to_angle(&self) -> GeometryResult<Angle>;
}

impl ParseAngle for str {
    fn to_angle(&self) -> GeometryResult<Angle> {
        parse_dms(self).or_else(|_| self.deg())
    }
}

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        ([+-])?                     # sign
        (\d{1,3})                   # degrees
        \s*[dD*°:\s]\s*
        (\d{1,2})                   # minutes
        \s*['mM:\s]\s*
        (\d{1,2}(?:\.\d+)?)         # seconds
        \s*(?:''|["sS])?
        \s*$
        "#,
    )
    .expect("DMS pattern is a valid regex")
});

/// Parse degrees-minutes-seconds, e.g. `45:30:15`, `+38d47m01s`, `45d 30' 15"`.
pub fn parse_dms(s: &str) -> GeometryResult<Angle> {
    let caps = DMS_REGEX
        .captures(s)
        .ok_or_else(|| GeometryError::parse(s, "not in DMS format"))?;
    sexagesimal(&caps, s).map(Angle::from_degrees)
}

fn sexagesimal(caps: &Captures, input: &str) -> GeometryResult<f64> {
    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => -1.0,
        _ => 1.0,
    };
    let field = |i: usize| -> GeometryResult<f64> {
        caps[i]
            .parse::<f64>()
            .map_err(|e| GeometryError::parse(input, &e.to_string()))
    };
    let whole = field(2)?;
    let minutes = field(3)?;
    let seconds = field(4)?;
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(GeometryError::parse(
            input,
            "minutes and seconds must be below 60",
        ));
    }
    Ok(sign * (whole + minutes / 60.0 + seconds / 3600.0))
}

fn parse_decimal(s: &str) -> GeometryResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| GeometryError::parse(s, "not a number"))
}
