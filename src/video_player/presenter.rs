// SPDX-License-Identifier: MPL-2.0
//! Frame presentation.
//!
//! [`FramePresenter`] drains the frame mailbox and paints the newest frame
//! onto a [`PresentationSurface`]. It keeps no history: every arrival fully
//! replaces the previous frame. When nothing has arrived yet the presenter
//! is simply empty.

use super::frame::{Frame, FrameReceiver};
use crate::ui::layout::{compute_layout, ContainerBounds, LayoutRect};
use std::sync::Arc;

/// Something a frame can be painted onto, like a 2D canvas.
pub trait PresentationSurface {
    /// Paints `frame` at the origin. The surface is resized to
    /// `frame.width() x frame.height()` first.
    fn put_frame(&mut self, frame: &Frame);
}

/// In-memory RGBA8 surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl PresentationSurface for PixelSurface {
    fn put_frame(&mut self, frame: &Frame) {
        self.width = frame.width();
        self.height = frame.height();
        self.pixels.clear();
        self.pixels.extend_from_slice(&frame.surface_pixels());
    }
}

/// Presents the most recent frame from the mailbox.
#[derive(Debug)]
pub struct FramePresenter<S> {
    frames: FrameReceiver,
    surface: S,
    current: Option<Arc<Frame>>,
    presented: u64,
    connected: bool,
}

impl<S: PresentationSurface> FramePresenter<S> {
    pub fn new(frames: FrameReceiver, surface: S) -> Self {
        Self {
            frames,
            surface,
            current: None,
            presented: 0,
            connected: true,
        }
    }

    /// Waits for the next frame and presents it.
    ///
    /// Returns `false` once the mailbox has closed; afterwards the presenter
    /// keeps showing the last frame. Cancel-safe.
    pub async fn next_frame(&mut self) -> bool {
        if !self.connected {
            return false;
        }
        match self.frames.changed().await {
            Ok(()) => {
                self.present_latest();
                true
            }
            Err(_) => {
                log::debug!("frame mailbox closed after {} frames", self.presented);
                self.connected = false;
                false
            }
        }
    }

    /// Presents a pending frame without waiting. Returns true if one was painted.
    pub fn poll_frame(&mut self) -> bool {
        if !self.frames.has_changed() {
            return false;
        }
        self.present_latest()
    }

    fn present_latest(&mut self) -> bool {
        let Some(frame) = self.frames.take_latest() else {
            return false;
        };
        self.surface.put_frame(&frame);
        self.current = Some(frame);
        self.presented += 1;
        true
    }

    /// Returns true while the backend side of the mailbox is alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The frame currently on the surface.
    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.current.as_deref()
    }

    /// Number of frames painted so far.
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    /// Letterboxed placement of the current frame, or `None` when there is
    /// nothing to show.
    #[must_use]
    pub fn layout(&self, bounds: ContainerBounds, padding: f32) -> Option<LayoutRect> {
        let frame = self.current.as_deref()?;
        compute_layout(frame.width(), frame.height(), bounds, padding)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::video_player::frame::{frame_mailbox, ImageData};

    fn frame_filled(width: u32, height: u32, value: u8) -> Frame {
        let pixels = vec![value; width as usize * height as usize * 4];
        Frame::from_image(ImageData::new(width, height, pixels).unwrap())
    }

    #[test]
    fn presenter_starts_empty() {
        let (_tx, rx) = frame_mailbox();
        let mut presenter = FramePresenter::new(rx, PixelSurface::new());
        assert!(!presenter.poll_frame());
        assert!(presenter.frame().is_none());
        assert!(presenter.surface().is_blank());
        assert!(presenter
            .layout(ContainerBounds::new(800.0, 600.0), 16.0)
            .is_none());
    }

    #[test]
    fn latest_frame_wins() {
        let (tx, rx) = frame_mailbox();
        let mut presenter = FramePresenter::new(rx, PixelSurface::new());

        tx.send(frame_filled(2, 2, 1));
        tx.send(frame_filled(3, 1, 2));
        tx.send(frame_filled(1, 2, 3));
        assert!(presenter.poll_frame());

        let surface = presenter.surface();
        assert_eq!((surface.width(), surface.height()), (1, 2));
        assert!(surface.pixels().iter().all(|&b| b == 3));
        assert_eq!(presenter.frames_presented(), 1);
        assert!(!presenter.poll_frame());
    }

    #[test]
    fn new_frame_replaces_previous_surface_content() {
        let (tx, rx) = frame_mailbox();
        let mut presenter = FramePresenter::new(rx, PixelSurface::new());

        tx.send(frame_filled(4, 4, 7));
        presenter.poll_frame();
        tx.send(frame_filled(2, 1, 9));
        presenter.poll_frame();

        assert_eq!(presenter.surface().pixels(), &[9; 8]);
        assert_eq!(presenter.frames_presented(), 2);
    }

    #[test]
    fn layout_uses_frame_geometry() {
        let (tx, rx) = frame_mailbox();
        let mut presenter = FramePresenter::new(rx, PixelSurface::new());
        tx.send(frame_filled(16, 9, 0));
        presenter.poll_frame();

        let rect = presenter
            .layout(ContainerBounds::new(1632.0, 1000.0), 16.0)
            .unwrap();
        assert_abs_diff_eq!(rect.width, 1600.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.height, 900.0, epsilon = 1e-3);
    }

    #[tokio::test]
    async fn next_frame_stops_when_mailbox_closes() {
        let (tx, rx) = frame_mailbox();
        let mut presenter = FramePresenter::new(rx, PixelSurface::new());

        tx.send(frame_filled(1, 1, 4));
        assert!(presenter.next_frame().await);
        drop(tx);
        assert!(!presenter.next_frame().await);
        assert!(!presenter.is_connected());
        // The last frame stays on screen.
        assert!(presenter.frame().is_some());
    }
}
