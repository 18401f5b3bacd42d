// SPDX-License-Identifier: MIT

//!
//! *Part of the month range selector project*
//!
//! This crate defines the basic datatypes used by the month range selector:
//! the month, the inclusive range of months, and the period a range falls
//! into (year, quarter, or custom).
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod month;
mod period;
mod range;

pub use month::*;
pub use period::*;
pub use range::*;
