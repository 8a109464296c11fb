//! Fixed-precision rounding for converted magnitudes.

/// Rounds `value` to `precision` decimal places.
///
/// The value is scaled to one extra digit and floored before the final
/// half-up rounding, so quotients such as `1 / 16` come out as exactly
/// `0.0625` instead of carrying binary noise. Anything that rounds to zero
/// is returned as positive `0.0`.
///
/// ```rust
/// use pxtorem::number::to_fixed;
///
/// assert_eq!(to_fixed(1.0 / 16.0, 5), 0.0625);
/// assert_eq!(to_fixed(0.5 / 16.0, 5), 0.03125);
/// assert_eq!(to_fixed(1.0 / 3.0, 2), 0.33);
/// ```
pub fn to_fixed(value: f64, precision: u32) -> f64 {
    let multiplier = 10f64.powi(precision as i32 + 1);
    let whole = (value * multiplier).floor();
    let rounded = (whole / 10.0 + 0.5).floor() / 10f64.powi(precision as i32);
    if rounded == 0.0 { 0.0 } else { rounded }
}
