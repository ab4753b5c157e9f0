//! Numeric rounding helpers

/// Largest integer less than or equal to `value`.
pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Smallest integer greater than or equal to `value`.
pub fn ceil(value: f64) -> i64 {
    value.ceil() as i64
}

/// Absolute value, truncated to an integer.
pub fn abs_int(value: f64) -> i64 {
    value.abs() as i64
}

/// Round to `precision` decimal digits, halves away from zero.
pub fn round(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}

/// Round to the nearest integer, halves away from zero.
pub fn round_int(value: f64) -> i64 {
    value.round() as i64
}
