// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! Translates user intent (play/pause button, space bar, jump buttons, zoom
//! slider) into backend commands and keeps the local playing flag in line
//! with what the backend actually acknowledged:
//!
//! - Stopped → Playing: start command acknowledged
//! - Playing → Stopped: stop command acknowledged
//! - Playing → EndReached: timeline position within the end tolerance
//! - EndReached → Playing: stop, rewind to 0, seek to frame 0, start
//!
//! Backend failures never escape: they are logged and the controller falls
//! back to `Stopped`.

use super::time_units::secs_to_frame_index;
use crate::application::port::{PlayerBackend, TimelineState};
use crate::config::defaults::{DEFAULT_END_TOLERANCE_SECS, DEFAULT_FRAME_PADDING};
use crate::domain::video::{FrameRate, OutputSize, PlaybackState, SliderPosition};
use crate::error::BackendError;
use crate::video_player::input::KeyPress;

/// Resolved playback parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub frame_rate: FrameRate,
    pub output_size: OutputSize,
    /// Remaining time (seconds) under which playback counts as finished.
    pub end_tolerance_secs: f64,
    /// Minimum gap between the presented frame and the viewport edge.
    pub frame_padding: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            frame_rate: FrameRate::default(),
            output_size: OutputSize::default(),
            end_tolerance_secs: DEFAULT_END_TOLERANCE_SECS,
            frame_padding: DEFAULT_FRAME_PADDING,
        }
    }
}

/// Playback state machine driving a [`PlayerBackend`].
pub struct PlaybackController<B, T> {
    backend: B,
    timeline: T,
    settings: PlaybackSettings,

    /// True only while a start command has been acknowledged and neither a
    /// stop nor the end of media has happened since.
    playing: bool,
}

impl<B: PlayerBackend, T: TimelineState> PlaybackController<B, T> {
    /// Creates a stopped controller.
    pub fn new(backend: B, timeline: T, settings: PlaybackSettings) -> Self {
        Self {
            backend,
            timeline,
            settings,
            playing: false,
        }
    }

    /// Returns the observable playback state.
    pub fn state(&self) -> PlaybackState {
        PlaybackState::resolve(self.playing, self.is_at_end())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns true when the playback position is within the end tolerance.
    pub fn is_at_end(&self) -> bool {
        let total = self.timeline.total_duration();
        total > 0.0 && total - self.timeline.playback_time() <= self.settings.end_tolerance_secs
    }

    /// Whether the transport button should offer "play" rather than "stop".
    pub fn shows_play_button(&self) -> bool {
        !self.playing || self.is_at_end()
    }

    /// Time to display: the preview position if one is active, else playback time.
    pub fn current_time(&self) -> f64 {
        self.timeline
            .preview_time()
            .unwrap_or_else(|| self.timeline.playback_time())
            .max(0.0)
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    /// Mutable timeline access for scrub gestures and backend clock updates.
    ///
    /// Call [`on_timeline_changed`](Self::on_timeline_changed) afterwards so
    /// the end of media is detected.
    pub fn timeline_mut(&mut self) -> &mut T {
        &mut self.timeline
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Play/pause button: restart at the end, pause while playing, play otherwise.
    ///
    /// Returns the resulting state. A failed command leaves the controller
    /// `Stopped` (or `EndReached` if the position is still at the end).
    pub async fn toggle(&mut self) -> PlaybackState {
        if let Err(err) = self.try_toggle().await {
            log::error!("failed to toggle playback: {err}");
            self.playing = false;
        }
        self.state()
    }

    async fn try_toggle(&mut self) -> Result<(), BackendError> {
        match self.state() {
            PlaybackState::EndReached => self.restart().await?,
            PlaybackState::Playing => {
                self.backend.stop_playback().await?;
                self.playing = false;
                log::debug!("playback paused at {:.3}s", self.timeline.playback_time());
            }
            PlaybackState::Stopped => self.start().await?,
        }

        if self.playing {
            self.timeline.set_preview_time(None);
        }
        Ok(())
    }

    async fn start(&mut self) -> Result<(), BackendError> {
        self.backend
            .start_playback(self.settings.frame_rate, self.settings.output_size)
            .await?;
        self.playing = true;
        log::debug!("playback started at {:.3}s", self.timeline.playback_time());
        Ok(())
    }

    async fn restart(&mut self) -> Result<(), BackendError> {
        self.backend.stop_playback().await?;
        self.timeline.set_playback_time(0.0);
        self.backend.seek_to(0).await?;
        self.start().await
    }

    /// Starts playback unless already playing.
    pub async fn play(&mut self) -> PlaybackState {
        if self.state().is_playing() {
            return PlaybackState::Playing;
        }
        self.toggle().await
    }

    /// Pauses playback if playing; otherwise a no-op.
    pub async fn pause(&mut self) -> PlaybackState {
        if self.playing {
            if let Err(err) = self.backend.stop_playback().await {
                log::error!("failed to pause playback: {err}");
            }
            self.playing = false;
        }
        self.state()
    }

    /// Handles a key press. Returns true if the key was consumed.
    ///
    /// Space on the document body commits a pending scrub preview (when not
    /// playing), seeks the backend to the committed position, then toggles.
    pub async fn handle_key(&mut self, key: KeyPress) -> bool {
        if !key.is_play_pause_shortcut() {
            return false;
        }

        if !self.playing {
            if let Some(preview) = self.timeline.preview_time() {
                self.timeline.set_playback_time(preview);
            }
            let frame = secs_to_frame_index(self.timeline.playback_time(), self.settings.frame_rate);
            if let Err(err) = self.backend.seek_to(frame).await {
                log::error!("failed to seek to frame {frame}: {err}");
                self.playing = false;
                return true;
            }
        }

        self.toggle().await;
        true
    }

    /// Jumps to the beginning, stopping playback.
    pub async fn go_to_start(&mut self) {
        self.playing = false;
        if let Err(err) = self.backend.stop_playback().await {
            log::error!("failed to stop playback: {err}");
        }
        self.timeline.set_playback_time(0.0);
    }

    /// Jumps to the end, stopping playback.
    pub async fn go_to_end(&mut self) {
        self.playing = false;
        if let Err(err) = self.backend.stop_playback().await {
            log::error!("failed to stop playback: {err}");
        }
        let total = self.timeline.total_duration();
        self.timeline.set_playback_time(total);
    }

    /// End-of-media detector. Re-evaluate after every timeline change.
    ///
    /// Fires at most once per playthrough: it clears the playing flag before
    /// issuing the stop, so later updates inside the tail window are ignored.
    /// Returns true if playback was stopped by this call.
    pub async fn on_timeline_changed(&mut self) -> bool {
        if !(self.playing && self.is_at_end()) {
            return false;
        }

        self.playing = false;
        log::info!(
            "end of media reached at {:.3}s of {:.3}s",
            self.timeline.playback_time(),
            self.timeline.total_duration()
        );
        if let Err(err) = self.backend.stop_playback().await {
            log::error!("failed to stop playback at end of media: {err}");
        }
        true
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    /// Zoom slider position derived from the timeline zoom.
    pub fn zoom_slider(&self) -> SliderPosition {
        SliderPosition::from_zoom(self.timeline.zoom(), self.timeline.zoom_out_limit())
    }

    /// Applies a zoom slider change, anchored on the playback position.
    pub fn set_zoom_slider(&mut self, value: f64) {
        let limit = self.timeline.zoom_out_limit();
        let zoom = SliderPosition::new(value).to_zoom(limit);
        let anchor = self.timeline.playback_time();
        self.timeline.update_zoom(zoom, anchor);
    }
}

impl<B, T: std::fmt::Debug> std::fmt::Debug for PlaybackController<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("timeline", &self.timeline)
            .field("settings", &self.settings)
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}
