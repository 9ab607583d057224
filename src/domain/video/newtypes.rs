// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

// =============================================================================
// FrameRate
// =============================================================================

/// Frame rate bounds (1 to 240 frames per second).
pub mod frame_rate_bounds {
    /// Minimum frame rate.
    pub const MIN: u32 = 1;
    /// Maximum frame rate.
    pub const MAX: u32 = 240;
    /// Default frame rate.
    pub const DEFAULT: u32 = 30;
}

/// Frame rate in frames per second, guaranteed to be within 1–240.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRate(u32);

impl FrameRate {
    /// Creates a new frame rate, clamping to valid range.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self(fps.clamp(frame_rate_bounds::MIN, frame_rate_bounds::MAX))
    }

    /// Returns the frame rate as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Duration of a single frame in seconds.
    #[must_use]
    pub fn frame_duration_secs(self) -> f64 {
        1.0 / f64::from(self.0)
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(frame_rate_bounds::DEFAULT)
    }
}

// =============================================================================
// OutputSize
// =============================================================================

/// Default backend output size.
pub mod output_size_bounds {
    /// Default output width in pixels.
    pub const DEFAULT_WIDTH: u32 = 1920;
    /// Default output height in pixels.
    pub const DEFAULT_HEIGHT: u32 = 1080;
}

/// Size of the frames the backend is asked to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputSize {
    width: u32,
    height: u32,
}

impl OutputSize {
    /// Creates an output size; zero dimensions are raised to one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self::new(
            output_size_bounds::DEFAULT_WIDTH,
            output_size_bounds::DEFAULT_HEIGHT,
        )
    }
}

// =============================================================================
// SliderPosition
// =============================================================================

/// Position of the timeline zoom slider, guaranteed to be within 0.0–1.0.
///
/// The slider is the inverse of the zoom level: `0.0` shows the widest
/// timeline span (`zoom == zoom_out_limit`), `1.0` the narrowest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderPosition(f64);

impl SliderPosition {
    /// Creates a new slider position, clamping to valid range.
    ///
    /// NaN maps to `0.0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Derives the slider position from a zoom level: `1 - zoom / limit`.
    #[must_use]
    pub fn from_zoom(zoom: f64, zoom_out_limit: f64) -> Self {
        if zoom_out_limit <= 0.0 {
            return Self(0.0);
        }
        Self::new(1.0 - zoom / zoom_out_limit)
    }

    /// Converts the slider position back into a zoom level: `(1 - v) * limit`.
    #[must_use]
    pub fn to_zoom(self, zoom_out_limit: f64) -> f64 {
        (1.0 - self.0) * zoom_out_limit
    }

    /// Returns the slider value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
