// SPDX-License-Identifier: MPL-2.0
//! Timeline state port definition.
//!
//! The timeline owns the playback position, the transient scrub preview
//! position, the media duration and the zoom transform. The playback
//! controller reads and writes it through [`TimelineState`].

/// Port for the editor timeline.
///
/// All times are in seconds. Implementations keep times non-negative and
/// bounded by [`total_duration`](TimelineState::total_duration).
pub trait TimelineState: Send {
    /// Committed playback position.
    fn playback_time(&self) -> f64;

    /// Transient scrub/hover position, if a preview is active.
    fn preview_time(&self) -> Option<f64>;

    /// Length of the media.
    fn total_duration(&self) -> f64;

    /// Widest allowed zoom (visible span in seconds).
    fn zoom_out_limit(&self) -> f64;

    /// Current zoom (visible span in seconds).
    fn zoom(&self) -> f64;

    /// Replaces the media length, re-clamping positions and zoom.
    fn set_total_duration(&mut self, secs: f64);

    fn set_playback_time(&mut self, secs: f64);

    /// Sets or clears (`None`) the preview position.
    fn set_preview_time(&mut self, secs: Option<f64>);

    /// Applies a new zoom while keeping `anchor_secs` at the same on-screen offset.
    fn update_zoom(&mut self, zoom: f64, anchor_secs: f64);
}
