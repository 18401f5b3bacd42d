// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Round to the nearest integer, with halves going up (towards +∞).
///
/// `f64::round()` sends -0.5 to -1.0, which would snap a drag that is half a
/// month left of the track to a month that doesn't exist.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Snap a pixel value to the nearest month boundary
pub(crate) fn snap_to_month_boundary(value: f64, month_width: f64) -> f64 {
    round_half_up(value / month_width) * month_width
}

/// Clamp without panicking when `max < min` (the lower bound wins)
pub(crate) fn clamp_lower_wins(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Whether a measured width can be used for any calculations
pub(crate) fn is_usable_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}
