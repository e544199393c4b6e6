use super::Sign;
use crate::angle::Angle;
use crate::constants::{EPSILON, SCALE};
use crate::math::clamped_acos;
use crate::Vector3;
use std::fmt;

/// A spherical cap: `{ p : vector·p / SCALE > distance }`.
///
/// `vector` is normalized to [`SCALE`] on construction, so `distance` is the
/// signed offset of the bounding plane from the sphere's center, in the same
/// length units. A cap of angular radius `r` has `distance = SCALE·cos r`:
/// positive distances are caps smaller than a hemisphere, zero is a
/// hemisphere bounded by a great circle, negative distances are caps larger
/// than a hemisphere.
///
/// ```
/// use htm_core::{Angle, Halfspace, Sign, Vector3};
///
/// let cap = Halfspace::cap(Vector3::z_axis(), Angle::from_degrees(10.0));
/// assert_eq!(cap.sign(), Sign::Positive);
/// assert!(cap.contains_strict(&Vector3::from_lat_lon_deg(85.0, 10.0)));
/// assert!(!cap.contains_loose(&Vector3::from_lat_lon_deg(75.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Halfspace {
    vector: Vector3,
    distance: f64,
}

impl Halfspace {
    /// Builds a halfspace from any non-zero orientation vector.
    ///
    /// A zero vector is kept as-is. Such a halfspace strictly contains every
    /// point when `distance < -EPSILON` and none otherwise; loose containment
    /// accepts every point while `distance < EPSILON`.
    pub fn new(vector: Vector3, distance: f64) -> Self {
        Self {
            vector: vector.to_scale(),
            distance,
        }
    }

    /// Cap of the given angular radius around `center`.
    pub fn cap(center: Vector3, radius: Angle) -> Self {
        Self::new(center, SCALE * libm::cos(radius.radians()))
    }

    /// Hemisphere bounded by the great circle through `a` then `b`.
    ///
    /// The interior lies on the right when walking from `a` to `b` as seen
    /// from outside the sphere.
    pub fn great_circle(a: &Vector3, b: &Vector3) -> Self {
        Self::new(b.cross(a), 0.0)
    }

    #[inline]
    pub fn vector(&self) -> Vector3 {
        self.vector
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Angular radius of the cap in radians, 0 to π.
    #[inline]
    pub fn radius(&self) -> f64 {
        clamped_acos(self.distance / SCALE)
    }

    /// `true` when the orientation vector vanished (e.g. the cross product of
    /// coincident or antipodal points).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vector.magnitude() <= EPSILON
    }

    /// The cap on the other side of the same plane.
    pub fn complement(&self) -> Self {
        Self {
            vector: -self.vector,
            distance: -self.distance,
        }
    }

    pub fn sign(&self) -> Sign {
        if self.distance > EPSILON {
            Sign::Positive
        } else if self.distance < -EPSILON {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Interior test; points on the boundary plane are rejected.
    #[inline]
    pub fn contains_strict(&self, p: &Vector3) -> bool {
        self.vector.dot(p) / SCALE > self.distance + EPSILON
    }

    /// Interior test; points on the boundary plane are accepted.
    #[inline]
    pub fn contains_loose(&self, p: &Vector3) -> bool {
        self.vector.dot(p) / SCALE > self.distance - EPSILON
    }

    /// Angular distance between the two caps' centers, in radians.
    #[inline]
    fn separation(&self, other: &Halfspace) -> f64 {
        clamped_acos(self.vector.dot(&other.vector) / (SCALE * SCALE))
    }

    /// `true` when the two caps cannot share a point.
    pub fn exclusive(&self, other: &Halfspace) -> bool {
        self.separation(other) >= self.radius() + other.radius()
    }

    /// `true` when the two caps intersect, touch, or one contains the other.
    #[inline]
    pub fn overlap(&self, other: &Halfspace) -> bool {
        !self.exclusive(other)
    }

    /// `true` when `other` lies entirely inside this cap.
    pub fn contains(&self, other: &Halfspace) -> bool {
        self.radius() - other.radius() >= self.separation(other)
    }
}

impl fmt::Display for Halfspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Halfspace: {{{}; {:.3}}}",
            self.vector.normalize(),
            self.distance / SCALE
        )
    }
}
