// SPDX-License-Identifier: MIT

//!
//! The month (unit) type
//!

use crate::RangeError;
use serde::{Deserialize, Deserializer, Serialize};

/// The number of months (units) on a track
pub const MONTH_COUNT: u8 = 12;

/// The index of the last month
pub const LAST_MONTH: u8 = MONTH_COUNT - 1;

/// Lowercase month names, indexed by [`Month::value`]
const SHORT_NAMES: [&str; MONTH_COUNT as usize] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A zero-based month slot.  Must be `0 <= month <= 11`
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Month(u8);

impl Month {
    /// January
    pub const FIRST: Month = Month(0);

    /// December
    pub const LAST: Month = Month(LAST_MONTH);

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Build a month from any integer, clamping it into `0..=11`
    pub fn clamped(value: i64) -> Self {
        Month(value.clamp(0, i64::from(LAST_MONTH)) as u8)
    }

    /// e.g. `jan`
    pub fn short_name(&self) -> &'static str {
        SHORT_NAMES[usize::from(self.0)]
    }

    /// All 12 months in order
    pub fn all() -> impl Iterator<Item = Month> {
        (0..MONTH_COUNT).map(Month)
    }
}

impl TryFrom<i64> for Month {
    type Error = RangeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(LAST_MONTH)).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(RangeError::InvalidMonth(value))
        }
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}
