//! Cartesian points on the reference sphere.
//!
//! The mesh works entirely in Cartesian form: trixel corners, edge midpoints,
//! halfspace normals and query vertices are all [`Vector3`] values of
//! magnitude [`SCALE`]. Angular quantities are derived from dot products
//! divided by `SCALE²`, never from an assumed unit length.
//!
//! # Latitude / Longitude
//!
//! [`Vector3::from_lat_lon`] is the one conversion from spherical input:
//!
//! ```text
//! x = SCALE · cos φ · cos λ
//! y = SCALE · cos φ · sin λ
//! z = SCALE · sin φ
//! ```
//!
//! so longitude 0° points along +X, longitude 90° along +Y and the north pole
//! along +Z. The octant test that picks a base trixel relies on exactly this
//! orientation.
//!
//! ```
//! use htm_core::Vector3;
//!
//! let p = Vector3::from_lat_lon_deg(0.0, 90.0);
//! assert!(p.x.abs() < 1e-15);
//! assert!((p.y - htm_core::constants::SCALE).abs() < 1e-15);
//!
//! let a = Vector3::x_axis();
//! let b = Vector3::y_axis();
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! assert!((a.angle_to(&b) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```
use crate::angle::Angle;
use crate::constants::SCALE;
use crate::math::clamped_acos;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// `+X` on the reference sphere (latitude 0°, longitude 0°).
    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(SCALE, 0.0, 0.0)
    }

    /// `+Y` on the reference sphere (latitude 0°, longitude 90°).
    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, SCALE, 0.0)
    }

    /// `+Z`, the north pole.
    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, SCALE)
    }

    /// Projects arbitrary Cartesian components onto the reference sphere.
    #[inline]
    pub fn on_sphere(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z).to_scale()
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit-length vector in the same direction. The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    /// Same direction, magnitude [`SCALE`]. The zero vector is returned unchanged.
    pub fn to_scale(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self * (SCALE / mag)
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Point on the sphere halfway along the great-circle arc to `other`.
    ///
    /// Undefined (zero) for antipodal points; mesh edges never span more than 90°.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other).to_scale()
    }

    /// Angular separation in radians between two points on the sphere.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> f64 {
        clamped_acos(self.dot(other) / (SCALE * SCALE))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Point on the sphere at the given longitude and latitude, in radians.
    pub fn from_spherical(lon: f64, lat: f64) -> Self {
        let (sin_lon, cos_lon) = libm::sincos(lon);
        let (sin_lat, cos_lat) = libm::sincos(lat);
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat) * SCALE
    }

    /// Point on the sphere at the given latitude and longitude.
    ///
    /// No range checking; see [`crate::angle::validate_latitude`].
    #[inline]
    pub fn from_lat_lon(lat: Angle, lon: Angle) -> Self {
        Self::from_spherical(lon.radians(), lat.radians())
    }

    #[inline]
    pub fn from_lat_lon_deg(lat_deg: f64, lon_deg: f64) -> Self {
        Self::from_lat_lon(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    /// Latitude in [-90°, 90°] and longitude in (-180°, 180°].
    ///
    /// The zero vector maps to `(0, 0)`; the poles report longitude 0.
    pub fn to_lat_lon(&self) -> (Angle, Angle) {
        let d2 = self.x * self.x + self.y * self.y;
        let lon = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let lat = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };
        (Angle::from_radians(lat), Angle::from_radians(lon))
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
