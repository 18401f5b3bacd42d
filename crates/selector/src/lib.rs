// SPDX-License-Identifier: MIT

//!
//! *Part of the month range selector project*
//!
//! This crate turns pointer drags and period taps into a committed range of
//! months.  A user drags the selection along a track of 12 months to move it,
//! or drags its trailing handle to resize it, and can jump straight to the full
//! year or the nearest quarter with the period tabs.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Converting the measured track width into a month width
//! - Snapping and clamping drags to month boundaries
//! - Committing the selected range and classifying it into a period
//! - Handling and emitting events (once per drag release or tab tap)
//!
//! The rest of the crate holds frontends.  There is currently only one, for
//! `egui`, but the engine can be driven by anything that can report a track
//! width and pointer positions (the tests drive it with no frontend at all).
//!

pub mod engine;
pub mod frontends;

pub use engine::*;
pub use frontends::desktop_egui::MonthRangeSelectorEgui;
