//! Mathematical utilities for the solar event pipeline.
//!
//! The almanac algorithm carries every angle in degrees, so the trigonometric
//! helpers here take and return degrees directly.

#[cfg(not(feature = "std"))]
use libm;

/// Computes sin(x) for x in degrees.
#[inline]
pub fn sin_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.to_radians().sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x.to_radians());
}

/// Computes cos(x) for x in degrees.
#[inline]
pub fn cos_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.to_radians().cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x.to_radians());
}

/// Computes tan(x) for x in degrees.
#[inline]
pub fn tan_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.to_radians().tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x.to_radians());
}

/// Computes asin(x) in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin().to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::asin(x).to_degrees();
}

/// Computes acos(x) in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos().to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::acos(x).to_degrees();
}

/// Computes atan(x) in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan().to_degrees();

    #[cfg(not(feature = "std"))]
    return libm::atan(x).to_degrees();
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds half-up (away from zero) to 4 decimal places.
///
/// Every pipeline stage output passes through this before the next stage
/// consumes it; the reference fixtures are only reproduced digit for digit
/// when the rounding point and rule match exactly.
#[inline]
pub fn round4(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return (x * 10_000.0).round() / 10_000.0;

    #[cfg(not(feature = "std"))]
    return libm::round(x * 10_000.0) / 10_000.0;
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Normalizes a fractional-hours value to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    let normalized = hours % 24.0;
    if normalized < 0.0 {
        normalized + 24.0
    } else {
        normalized
    }
}
