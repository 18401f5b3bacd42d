// SPDX-License-Identifier: MIT

//!
//! The month range type
//!

use crate::Month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can arise in relation to a [`Month`] or [`MonthRange`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The month number is not allowed (must be 0 <= month <= 11)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The range starts after it ends
    #[error("Range start `{start}` is after its end `{end}`")]
    StartAfterEnd { start: i64, end: i64 },
}

/// An inclusive `[start, end]` span of months.
///
/// If a `MonthRange` exists then `0 <= start <= end <= 11` holds.  It is never
/// mutated in place, a new one replaces the old.
#[derive(derive_more::Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[display("[{start}, {end}]")]
pub struct MonthRange {
    start: Month,
    end: Month,
}

impl MonthRange {
    /// The whole year, `[0, 11]`
    pub const FULL_YEAR: MonthRange = MonthRange {
        start: Month::FIRST,
        end: Month::LAST,
    };

    /// Create a new range if `start <= end`
    pub fn new(start: Month, end: Month) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::StartAfterEnd {
                start: start.value().into(),
                end: end.value().into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Create a new range from raw month numbers if the result will be valid
    pub fn from_values(start: i64, end: i64) -> Result<Self, RangeError> {
        Self::new(Month::try_from(start)?, Month::try_from(end)?)
    }

    /// Build a range from any pair of integers.  Both are clamped into
    /// `0..=11` and swapped if they are the wrong way round
    pub fn clamped(start: i64, end: i64) -> Self {
        let start = Month::clamped(start);
        let end = Month::clamped(end);
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn start(&self) -> Month {
        self.start
    }

    pub fn end(&self) -> Month {
        self.end
    }

    /// The number of months covered (at least 1)
    pub fn month_count(&self) -> u8 {
        self.end.value() - self.start.value() + 1
    }

    pub fn contains(&self, month: Month) -> bool {
        (self.start..=self.end).contains(&month)
    }

    /// `(start, end)` as plain numbers
    pub fn as_values(&self) -> (u8, u8) {
        (self.start.value(), self.end.value())
    }
}

impl Default for MonthRange {
    /// May to July, `[4, 6]`
    fn default() -> Self {
        Self {
            start: Month::clamped(4),
            end: Month::clamped(6),
        }
    }
}

impl TryFrom<[i64; 2]> for MonthRange {
    type Error = RangeError;
    fn try_from([start, end]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::from_values(start, end)
    }
}

impl Serialize for MonthRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.start, self.end].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonthRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = <[i64; 2]>::deserialize(deserializer)?;
        MonthRange::try_from(values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_values() {
        // Should return error
        assert_eq!(
            MonthRange::from_values(5, 4),
            Err(RangeError::StartAfterEnd { start: 5, end: 4 })
        );
        assert_eq!(
            MonthRange::from_values(-1, 4),
            Err(RangeError::InvalidMonth(-1))
        );
        assert_eq!(
            MonthRange::from_values(0, 12),
            Err(RangeError::InvalidMonth(12))
        );

        // Should be ok
        let range = MonthRange::from_values(3, 3).unwrap();
        assert_eq!(range.month_count(), 1);
        assert_eq!(MonthRange::from_values(0, 11).unwrap(), MonthRange::FULL_YEAR);
    }

    #[test]
    fn default_is_may_to_july() {
        assert_eq!(MonthRange::default().as_values(), (4, 6));
    }

    #[test]
    fn clamped() {
        assert_eq!(MonthRange::clamped(-3, 40), MonthRange::FULL_YEAR);
        assert_eq!(MonthRange::clamped(8, 2).as_values(), (2, 8));
        assert_eq!(MonthRange::clamped(15, 13).as_values(), (11, 11));
    }

    #[test]
    fn contains() {
        let range = MonthRange::from_values(3, 5).unwrap();
        assert!(range.contains(Month::clamped(3)));
        assert!(range.contains(Month::clamped(5)));
        assert!(!range.contains(Month::clamped(6)));
    }

    #[test]
    fn json() {
        let range = MonthRange::from_values(2, 9).unwrap();
        assert_eq!(serde_json::to_string(&range).unwrap(), "[2,9]");
        let parsed: MonthRange = serde_json::from_str("[2,9]").unwrap();
        assert_eq!(parsed, range);
        assert!(serde_json::from_str::<MonthRange>("[9,2]").is_err());
        assert!(serde_json::from_str::<MonthRange>("[0,12]").is_err());
    }

    proptest! {
        #[test]
        fn clamped_always_upholds_invariant(start in -100i64..100, end in -100i64..100) {
            let range = MonthRange::clamped(start, end);
            prop_assert!(range.start() <= range.end());
            prop_assert!(range.end() <= Month::LAST);
        }
    }
}
