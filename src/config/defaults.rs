// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Playback**: Frame rate and backend output size
//! - **End of media**: Tolerance for detecting the end of playback
//! - **Layout**: Padding around the presented frame
//! - **Timeline zoom**: Zoom bounds in seconds of visible timeline

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Frame rate requested from the backend when playback starts.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Minimum accepted frame rate.
pub const MIN_FRAME_RATE: u32 = 1;

/// Maximum accepted frame rate.
pub const MAX_FRAME_RATE: u32 = 240;

/// Width of the frames requested from the backend.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 1920;

/// Height of the frames requested from the backend.
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 1080;

// ==========================================================================
// End of Media Defaults
// ==========================================================================

/// Remaining playback time (in seconds) under which playback counts as finished.
pub const DEFAULT_END_TOLERANCE_SECS: f64 = 0.1;

/// Largest accepted end tolerance (in seconds).
pub const MAX_END_TOLERANCE_SECS: f64 = 2.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Minimum distance (in logical pixels) between the frame and the container edge.
pub const DEFAULT_FRAME_PADDING: f32 = 16.0;

/// Largest accepted frame padding.
pub const MAX_FRAME_PADDING: f32 = 256.0;

// ==========================================================================
// Timeline Zoom Defaults
// ==========================================================================

/// Narrowest visible timeline span in seconds.
pub const MIN_TIMELINE_ZOOM_SECS: f64 = 1.0;

/// Widest visible timeline span in seconds, regardless of media length.
pub const MAX_TIMELINE_ZOOM_OUT_SECS: f64 = 600.0;
