// SPDX-License-Identifier: MPL-2.0
//! Letterbox layout for the presented frame.
//!
//! Fits a frame of arbitrary aspect ratio inside the player viewport, keeping
//! at least `padding` between the frame and every container edge.

/// Size of the player viewport in logical pixels.
///
/// A zero or non-finite dimension means the viewport has not been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true once both dimensions are known and positive.
    #[must_use]
    pub fn is_known(self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }
}

/// Placement of the frame inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Computes the largest centered rectangle with the frame's aspect ratio.
///
/// Returns `None` for a frame without area; there is nothing to lay out.
/// Unknown container bounds fall back to a square aspect and yield a finite,
/// non-negative rectangle rather than `NaN`.
///
/// # Examples
///
/// ```
/// use player_sync::ui::layout::{compute_layout, ContainerBounds};
///
/// let rect = compute_layout(1920, 1080, ContainerBounds::new(1000.0, 1000.0), 16.0).unwrap();
/// assert_eq!(rect.x, 16.0);
/// assert_eq!(rect.width, 968.0);
/// ```
#[must_use]
pub fn compute_layout(
    frame_width: u32,
    frame_height: u32,
    container: ContainerBounds,
    padding: f32,
) -> Option<LayoutRect> {
    if frame_width == 0 || frame_height == 0 {
        return None;
    }

    let padding = finite_or_zero(padding).max(0.0);
    let container_width = finite_or_zero(container.width).max(0.0);
    let container_height = finite_or_zero(container.height).max(0.0);
    let inner_width = container_width - padding * 2.0;
    let inner_height = container_height - padding * 2.0;

    let container_aspect = if container.is_known() && inner_width > 0.0 && inner_height > 0.0 {
        inner_width / inner_height
    } else {
        1.0
    };
    #[allow(clippy::cast_precision_loss)]
    let frame_aspect = frame_width as f32 / frame_height as f32;

    let (width, height) = if frame_aspect < container_aspect {
        let height = inner_height.max(0.0);
        (height * frame_aspect, height)
    } else {
        let width = inner_width.max(0.0);
        (width, width / frame_aspect)
    };

    Some(LayoutRect {
        x: ((container_width - width) / 2.0).max(padding),
        y: ((container_height - height) / 2.0).max(padding),
        width,
        height,
    })
}
