// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`project`]: Project framing types ([`AspectRatio`](project::AspectRatio),
//!   [`AspectRatioSelection`](project::AspectRatioSelection), [`CropArea`](project::CropArea))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`FrameRate`](video::FrameRate), [`SliderPosition`](video::SliderPosition))

pub mod project;
pub mod video;
