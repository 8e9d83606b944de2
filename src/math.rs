//! Math utility functions.

use num_traits::Float;

/// Number of degrees in a full turn of the hue wheel.
pub const FULL_TURN: i64 = 360;

/// Wrap `value` into `[0, full)`.
pub fn wrap<T: Float>(value: T, full: T) -> T {
    let value = value % full;
    if value < T::zero() {
        value + full
    } else {
        value
    }
}

/// Wrap an integer hue in degrees into `[0, 360)`.
pub fn wrap_hue(hue: i64) -> u16 {
    hue.rem_euclid(FULL_TURN) as u16
}

/// Clamp an integer percentage into `[0, 100]`.
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Scale a value in the unit range by `scale` and round it half away from
/// zero, saturating into `0..=max`. NaN maps to zero.
pub fn round_scaled<T: Float>(value: T, scale: T, max: u8) -> u8 {
    let scaled = (value * scale).round();
    if scaled.is_nan() || scaled <= T::zero() {
        0
    } else {
        scaled.to_u8().map_or(max, |v| v.min(max))
    }
}

/// Round a hue in degrees to the nearest whole degree in `[0, 360)`.
pub fn round_hue<T: Float>(degrees: T) -> u16 {
    wrap_hue(degrees.round().to_i64().unwrap_or(0))
}
