use crate::constants::TWOPI;

/// `acos` with its argument clamped to [-1, 1].
///
/// Ratios such as `distance / SCALE` or `a·b / SCALE²` land a few ulps
/// outside the domain at exact tangency.
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    libm::acos(x.clamp(-1.0, 1.0))
}

/// Wraps an angle in radians into [0, 2π).
#[inline]
pub fn wrap_0_2pi(angle: f64) -> f64 {
    let wrapped = libm::fmod(angle, TWOPI);
    if wrapped < 0.0 {
        wrapped + TWOPI
    } else {
        wrapped
    }
}
