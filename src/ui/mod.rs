// SPDX-License-Identifier: MPL-2.0
//! User interface helpers for the player view.
//!
//! - [`layout`] - Letterbox placement of the frame inside the viewport
//! - [`time_display`] - `MM:SS.FF` timestamps for the time readouts
//! - [`widgets`] - Custom Iced widgets (video canvas)

pub mod layout;
pub mod time_display;
pub mod widgets;
