// SPDX-License-Identifier: MIT

//!
//! The committed range
//!

use log::{debug, warn};
use month_range_core::{MonthRange, Period, RangeError};

/// The committed selection.  All writes go through [`RangeState::commit`] (or
/// [`RangeState::commit_clamped`]), which replace the range wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    range: MonthRange,
}

impl RangeState {
    pub fn new(range: MonthRange) -> Self {
        Self { range }
    }

    /// The committed range (a copy)
    pub fn range(&self) -> MonthRange {
        self.range
    }

    /// The period of the committed range.  Always derived, never stored
    pub fn period(&self) -> Period {
        Period::classify(self.range)
    }

    /// Replace the range if `0 <= start <= end <= 11`.  On error the previous
    /// range is kept
    pub fn commit(&mut self, start: i64, end: i64) -> Result<MonthRange, RangeError> {
        let range = MonthRange::from_values(start, end)?;
        self.replace(range);
        Ok(range)
    }

    /// Like [`RangeState::commit`], but an invalid pair is clamped into a valid
    /// range rather than rejected
    pub fn commit_clamped(&mut self, start: i64, end: i64) -> MonthRange {
        match self.commit(start, end) {
            Ok(range) => range,
            Err(error) => {
                let range = MonthRange::clamped(start, end);
                warn!("{error}, committing {range} instead");
                self.replace(range);
                range
            }
        }
    }

    /// Replace the range with one that is already known to be valid
    pub fn replace(&mut self, range: MonthRange) {
        debug!("range committed {} -> {}", self.range, range);
        self.range = range;
    }
}
