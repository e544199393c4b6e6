/// Radius of the reference sphere. Every point handled by the mesh has this
/// magnitude, and every halfspace vector is normalized to it.
pub const SCALE: f64 = 1.0;

/// Boundary tolerance, in the length units of [`SCALE`].
///
/// Strict containment requires a point to clear a plane by more than this;
/// loose containment accepts points up to this far on the wrong side.
pub const EPSILON: f64 = 1.0e-12 * SCALE;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
