// SPDX-License-Identifier: MPL-2.0
//! In-memory timeline state.
//!
//! Holds the committed playback position, the scrub preview position, the
//! media duration and the zoom transform (visible span and its left edge).

use crate::application::port::TimelineState;
use crate::config::defaults::{MAX_TIMELINE_ZOOM_OUT_SECS, MIN_TIMELINE_ZOOM_SECS};

/// Visible window of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineTransform {
    /// Time at the left edge, in seconds.
    pub position: f64,
    /// Visible span, in seconds.
    pub zoom: f64,
}

/// Timeline state owned by the editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    playback_time: f64,
    preview_time: Option<f64>,
    total_duration: f64,
    transform: TimelineTransform,
}

fn sanitize(secs: f64) -> f64 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}

impl Timeline {
    /// Creates a timeline for media of `total_duration` seconds, fully zoomed out.
    #[must_use]
    pub fn new(total_duration: f64) -> Self {
        let mut timeline = Self::default();
        timeline.set_total_duration(total_duration);
        timeline
    }

    #[must_use]
    pub fn transform(&self) -> TimelineTransform {
        self.transform
    }

    /// Bounds a time to `[0, total_duration]`; unknown durations only bound below.
    fn clamp_time(&self, secs: f64) -> f64 {
        let secs = sanitize(secs);
        if self.total_duration > 0.0 {
            secs.min(self.total_duration)
        } else {
            secs
        }
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        let limit = self.zoom_out_limit();
        if limit <= 0.0 {
            return 0.0;
        }
        sanitize(zoom).clamp(MIN_TIMELINE_ZOOM_SECS.min(limit), limit)
    }

    fn clamp_position(&self, position: f64) -> f64 {
        let max = (self.total_duration - self.transform.zoom).max(0.0);
        sanitize(position).min(max)
    }
}

impl TimelineState for Timeline {
    fn playback_time(&self) -> f64 {
        self.playback_time
    }

    fn preview_time(&self) -> Option<f64> {
        self.preview_time
    }

    fn total_duration(&self) -> f64 {
        self.total_duration
    }

    fn zoom_out_limit(&self) -> f64 {
        self.total_duration.min(MAX_TIMELINE_ZOOM_OUT_SECS)
    }

    fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    fn set_total_duration(&mut self, secs: f64) {
        let was_fully_zoomed_out = self.transform.zoom >= self.zoom_out_limit();
        self.total_duration = sanitize(secs);
        if was_fully_zoomed_out {
            self.transform.zoom = self.zoom_out_limit();
        }
        self.playback_time = self.clamp_time(self.playback_time);
        self.preview_time = self.preview_time.map(|t| self.clamp_time(t));
        self.transform.zoom = self.clamp_zoom(self.transform.zoom);
        self.transform.position = self.clamp_position(self.transform.position);
    }

    fn set_playback_time(&mut self, secs: f64) {
        self.playback_time = self.clamp_time(secs);
    }

    fn set_preview_time(&mut self, secs: Option<f64>) {
        self.preview_time = secs.map(|t| self.clamp_time(t));
    }

    fn update_zoom(&mut self, zoom: f64, anchor_secs: f64) {
        let old_zoom = self.transform.zoom;
        let new_zoom = self.clamp_zoom(zoom);
        let anchor = sanitize(anchor_secs);

        let position = if old_zoom > 0.0 {
            anchor - (anchor - self.transform.position) * (new_zoom / old_zoom)
        } else {
            0.0
        };

        self.transform.zoom = new_zoom;
        self.transform.position = self.clamp_position(position);
    }
}
