// SPDX-License-Identifier: MIT

//!
//! Constants
//!

use month_range_core::MONTH_COUNT;

/// The number of month slots the track is divided into
pub const TRACK_MONTHS: f64 = MONTH_COUNT as f64;

/// The default width (px) of the resize handle at the trailing edge of the
/// selection
pub const DEFAULT_HANDLE_WIDTH_PX: f64 = 24.0;
