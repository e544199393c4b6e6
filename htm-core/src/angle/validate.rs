use super::Angle;
use crate::constants::HALF_PI;
use crate::math::wrap_0_2pi;
use crate::{GeometryError, GeometryResult};

/// Checks that a latitude is finite and within [-90°, +90°].
pub fn validate_latitude(angle: Angle) -> GeometryResult<Angle> {
    if !angle.is_finite() {
        return Err(GeometryError::not_finite("Latitude"));
    }
    if (-HALF_PI..=HALF_PI).contains(&angle.radians()) {
        return Ok(angle);
    }
    Err(GeometryError::out_of_range(
        "Latitude",
        &format!("{:.2}° outside [-90°, +90°]", angle.degrees()),
    ))
}

/// Checks that a longitude is finite and wraps it into [0°, 360°).
pub fn validate_longitude(angle: Angle) -> GeometryResult<Angle> {
    if !angle.is_finite() {
        return Err(GeometryError::not_finite("Longitude"));
    }
    Ok(Angle::from_radians(wrap_0_2pi(angle.radians())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_in_range() {
        assert!(validate_latitude(Angle::from_degrees(90.0)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(-90.0)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(12.5)).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let err = validate_latitude(Angle::from_degrees(95.0)).unwrap_err();
        assert!(matches!(err, GeometryError::OutOfRange { .. }));
        assert!(err.to_string().contains("95.00°"));
    }

    #[test]
    fn test_latitude_not_finite() {
        let err = validate_latitude(Angle::from_radians(f64::NAN)).unwrap_err();
        assert_eq!(err, GeometryError::not_finite("Latitude"));
    }

    #[test]
    fn test_longitude_wraps() {
        let lon = validate_longitude(Angle::from_degrees(-90.0)).unwrap();
        assert!((lon.degrees() - 270.0).abs() < 1e-9);

        let lon = validate_longitude(Angle::from_degrees(400.0)).unwrap();
        assert!((lon.degrees() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_not_finite() {
        assert!(validate_longitude(Angle::from_degrees(f64::INFINITY)).is_err());
    }
}
