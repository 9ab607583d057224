// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the editor player.
//!
//! This module defines the playback states observed by the player surface.

/// Represents the current playback state of the player.
///
/// `EndReached` is derived from the timeline position rather than stored:
/// whenever the remaining time falls within the end tolerance the player is
/// considered finished, whether or not the backend has been stopped yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No playback in progress.
    #[default]
    Stopped,
    /// The backend acknowledged a start command and is producing frames.
    Playing,
    /// The playback position reached the end of the media.
    EndReached,
}

impl PlaybackState {
    /// Resolves the observable state from the local playing flag and the end check.
    ///
    /// The end check wins so that a toggle issued at the end always restarts.
    #[must_use]
    pub fn resolve(is_playing: bool, is_at_end: bool) -> Self {
        if is_at_end {
            Self::EndReached
        } else if is_playing {
            Self::Playing
        } else {
            Self::Stopped
        }
    }

    /// Returns true if the player is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the player is stopped (not at the end).
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns true if the end of the media was reached.
    #[must_use]
    pub fn is_end_reached(self) -> bool {
        matches!(self, Self::EndReached)
    }
}
