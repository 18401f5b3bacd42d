// SPDX-License-Identifier: MIT

//!
//! Pixel extent
//!

use crate::engine::round_half_up;
use month_range_core::{LAST_MONTH, MonthRange};
use serde::Serialize;

/// Where the selection sits on the track, in pixels.
///
/// This is a view of a [`MonthRange`] (or of an in-progress drag), never the
/// source of truth.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct PixelExtent {
    /// Distance (px) of the leading edge from the start of the track
    pub offset: f64,

    /// The width (px) of the selection
    pub width: f64,
}

impl PixelExtent {
    /// The extent that exactly covers `range`
    pub fn from_range(range: MonthRange, month_width: f64) -> Self {
        let (start, _) = range.as_values();
        Self {
            offset: f64::from(start) * month_width,
            width: f64::from(range.month_count()) * month_width,
        }
    }

    /// The trailing edge (px)
    pub fn max_x(&self) -> f64 {
        self.offset + self.width
    }

    pub fn contains_x(&self, x: f64) -> bool {
        (self.offset..=self.max_x()).contains(&x)
    }

    /// Quantize to the nearest month boundaries.
    ///
    /// Both bounds are clamped into `0..=11`, and if the end ends up before
    /// the start it is collapsed onto the start, so the pair is always a valid
    /// range.  `month_width` must be positive.
    pub fn to_month_bounds(&self, month_width: f64) -> (i64, i64) {
        let last = i64::from(LAST_MONTH);
        let start = (round_half_up(self.offset / month_width) as i64).clamp(0, last);
        let end = (round_half_up(self.max_x() / month_width) as i64 - 1).clamp(0, last);
        (start, end.max(start))
    }
}
