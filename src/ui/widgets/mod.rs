// SPDX-License-Identifier: MPL-2.0
pub mod video_canvas;

pub use video_canvas::VideoCanvas;
