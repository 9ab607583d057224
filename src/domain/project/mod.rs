// SPDX-License-Identifier: MPL-2.0
//! Project configuration types consumed by the player toolbar.
//!
//! The project itself is stored elsewhere; the player only reads the aspect
//! ratio selection and the crop area to seed the crop dialog.

mod types;

pub use types::{AspectRatio, AspectRatioSelection, CropArea, XY};
