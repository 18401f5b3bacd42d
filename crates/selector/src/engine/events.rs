// SPDX-License-Identifier: MIT

//!
//! Events
//!

use month_range_core::{MonthRange, Period};
use serde::Serialize;
use std::fmt::Debug;

/// Events that an external programme might be interested in.  Each one carries
/// a copy of the values, never a reference into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectorEvent {
    /// A range was committed (drag release or period tap)
    RangeChanged { range: MonthRange, period: Period },
}
