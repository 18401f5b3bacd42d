// SPDX-License-Identifier: MIT

//!
//! Periods (the categorical shortcuts for a [`MonthRange`])
//!

use crate::{Month, MonthRange};
use serde::{Deserialize, Serialize};

/// The months on which a quarter may start
pub const QUARTER_START_MONTHS: [u8; 4] = [0, 3, 6, 9];

/// The number of months in a quarter
const QUARTER_LENGTH: u8 = 3;

/// The category of a [`MonthRange`].
///
/// A `Period` is never stored alongside a range.  It is always derived from the
/// range with [`Period::classify`].
#[derive(derive_more::Display, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    Year,
    Quarter,
    Custom,
}

impl Period {
    /// Every period, in the order the tabs are shown
    pub const ALL: [Period; 3] = [Period::Year, Period::Quarter, Period::Custom];

    /// Work out which period a range represents
    pub fn classify(range: MonthRange) -> Self {
        if range == MonthRange::FULL_YEAR {
            return Period::Year;
        }
        let start = range.start().value();
        if QUARTER_START_MONTHS.contains(&start) && range.month_count() == QUARTER_LENGTH {
            return Period::Quarter;
        }
        Period::Custom
    }

    /// The canonical range for this period, given the current range.
    ///
    /// `Custom` has no canonical range, so `None` is returned and the current
    /// range is to be left as it is.
    pub fn apply(self, current: MonthRange) -> Option<MonthRange> {
        match self {
            Period::Year => Some(MonthRange::FULL_YEAR),
            Period::Quarter => {
                let start = nearest_quarter_start(current.start());
                let end = Month::clamped(i64::from(start.value() + QUARTER_LENGTH - 1));
                MonthRange::new(start, end).ok()
            }
            Period::Custom => None,
        }
    }
}

/// The quarter start month closest to `month`.  Ties go to the earlier quarter
pub fn nearest_quarter_start(month: Month) -> Month {
    let mut best: Option<(u8, u8)> = None;
    for anchor in QUARTER_START_MONTHS {
        let distance = anchor.abs_diff(month.value());
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((anchor, distance)),
        }
    }
    best.map_or(Month::FIRST, |(anchor, _)| Month::clamped(i64::from(anchor)))
}
