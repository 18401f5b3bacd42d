// SPDX-License-Identifier: MIT

//!
//! Frontends
//!

pub mod desktop_egui;
