// SPDX-License-Identifier: MPL-2.0
//! Time unit conversion utilities for playback.
//!
//! Provides conversion between timeline seconds and backend frame indices.
//! The backend addresses positions by frame index, the timeline by seconds.

use crate::domain::video::FrameRate;

/// Tolerance absorbing float error when a time lands exactly on a frame boundary.
const FRAME_BOUNDARY_EPSILON: f64 = 1e-6;

/// Converts seconds to the index of the frame being shown at that time.
///
/// Computes `floor(secs * fps + 1e-6)`, clamped to zero for negative or
/// non-finite input and saturating at `u32::MAX`.
///
/// The small epsilon differs from a plain `floor(secs * fps)` only when the
/// product lands a hair below an integer through float error: `65.1 s` at
/// 30 fps gives frame 1953 here where a bare floor gives 1952. The same
/// rounding is used by [`format_time`](crate::ui::time_display::format_time),
/// so a seek lands on the frame the time readout shows.
///
/// # Examples
///
/// ```
/// use player_sync::domain::video::FrameRate;
/// use player_sync::video_player::time_units::secs_to_frame_index;
///
/// assert_eq!(secs_to_frame_index(2.0, FrameRate::new(30)), 60);
/// assert_eq!(secs_to_frame_index(0.99, FrameRate::new(30)), 29);
/// ```
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn secs_to_frame_index(secs: f64, fps: FrameRate) -> u32 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    let frames = (secs * f64::from(fps.value()) + FRAME_BOUNDARY_EPSILON).floor();
    if frames >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        frames as u32
    }
}

/// Converts a frame index to the time (in seconds) at which it starts.
///
/// # Examples
///
/// ```
/// use player_sync::domain::video::FrameRate;
/// use player_sync::video_player::time_units::frame_index_to_secs;
///
/// assert_eq!(frame_index_to_secs(60, FrameRate::new(30)), 2.0);
/// ```
#[inline]
pub fn frame_index_to_secs(frame_index: u32, fps: FrameRate) -> f64 {
    f64::from(frame_index) / f64::from(fps.value())
}
