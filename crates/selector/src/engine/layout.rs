// SPDX-License-Identifier: MIT

//!
//! Track layout
//!

use crate::engine::{TRACK_MONTHS, is_usable_width};
use log::{debug, warn};

/// The measured track, and the width of one month on it.
///
/// Until a usable width has been measured the month width is 0 and no gesture
/// maths is done.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    /// The width (px) of the whole track
    track_width: f64,

    /// The width (px) of a single month (`track_width / 12`)
    month_width: f64,
}

impl TrackLayout {
    /// Record a new track width.  Returns `false` (and keeps the previous
    /// measurement) if the width is not a positive, finite number
    pub fn measure(&mut self, track_width: f64) -> bool {
        if !is_usable_width(track_width) {
            warn!("ignoring unusable track width {track_width}");
            return false;
        }
        self.track_width = track_width;
        self.month_width = track_width / TRACK_MONTHS;
        debug!(
            "track measured: width {}, month width {}",
            self.track_width, self.month_width
        );
        true
    }

    /// Whether a usable width has been measured yet
    pub fn is_measured(&self) -> bool {
        is_usable_width(self.month_width)
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn month_width(&self) -> f64 {
        self.month_width
    }
}
