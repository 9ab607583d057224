// SPDX-License-Identifier: MPL-2.0
//! Decoded frames and the latest-wins frame mailbox.
//!
//! The backend pushes frames at its own cadence. Only the newest frame is
//! interesting to the player, so delivery goes through a single-slot mailbox
//! built on [`tokio::sync::watch`]: every send overwrites the slot, and a
//! receiver that was busy simply observes the most recent frame. Dropped
//! intermediate frames are not an error.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::watch;

/// Bytes per RGBA8 pixel.
const BYTES_PER_PIXEL: usize = 4;

/// RGBA8 pixel buffer with its own dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
}

impl ImageData {
    /// Wraps an RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `pixels` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(Error::InvalidFrame(format!(
                "{width}x{height} RGBA buffer needs {expected} bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// A decoded frame as delivered by the backend.
///
/// The declared `width` is what the presentation surface is sized to; the
/// height always comes from the pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    data: ImageData,
}

impl Frame {
    /// Creates a frame from the backend's declared width and its pixel data.
    #[must_use]
    pub fn new(width: u32, data: ImageData) -> Self {
        if width != data.width() {
            log::warn!(
                "frame declares width {width} but pixel buffer is {} wide",
                data.width()
            );
        }
        Self { width, data }
    }

    /// Creates a frame whose declared width matches the pixel data.
    #[must_use]
    pub fn from_image(data: ImageData) -> Self {
        Self {
            width: data.width(),
            data,
        }
    }

    /// Declared frame width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height, taken from the pixel buffer.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.data.height()
    }

    #[must_use]
    pub fn data(&self) -> &ImageData {
        &self.data
    }

    /// Pixels laid out for a `width() x height()` surface.
    ///
    /// Borrows the buffer when the declared width matches the data. Otherwise
    /// each row copies the overlapping columns and zero-fills the remainder.
    #[must_use]
    pub fn surface_pixels(&self) -> Cow<'_, [u8]> {
        let src_width = self.data.width() as usize;
        let dst_width = self.width as usize;
        if src_width == dst_width {
            return Cow::Borrowed(self.data.pixels());
        }

        let rows = self.data.height() as usize;
        let src_stride = src_width * BYTES_PER_PIXEL;
        let dst_stride = dst_width * BYTES_PER_PIXEL;
        let copy_len = src_stride.min(dst_stride);
        let mut out = vec![0u8; dst_stride * rows];
        for (dst_row, src_row) in out
            .chunks_exact_mut(dst_stride.max(1))
            .zip(self.data.pixels().chunks_exact(src_stride.max(1)))
        {
            dst_row[..copy_len].copy_from_slice(&src_row[..copy_len]);
        }
        Cow::Owned(out)
    }
}

/// Creates a connected frame mailbox.
#[must_use]
pub fn frame_mailbox() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = watch::channel(None);
    (FrameSender { tx }, FrameReceiver { rx })
}

/// Backend side of the frame mailbox. Cloneable.
#[derive(Debug, Clone)]
pub struct FrameSender {
    tx: watch::Sender<Option<Arc<Frame>>>,
}

impl FrameSender {
    /// Replaces whatever frame is waiting in the mailbox.
    ///
    /// Never blocks and succeeds even if the receiver is gone.
    pub fn send(&self, frame: Frame) {
        self.tx.send_replace(Some(Arc::new(frame)));
    }

    /// Returns true if the presenting side has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Presenting side of the frame mailbox.
#[derive(Debug)]
pub struct FrameReceiver {
    rx: watch::Receiver<Option<Arc<Frame>>>,
}

/// Returned by [`FrameReceiver::changed`] once every sender has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxClosed;

impl FrameReceiver {
    /// Waits until a frame newer than the last one taken is available.
    ///
    /// Cancel-safe.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxClosed`] when all senders have been dropped.
    pub async fn changed(&mut self) -> std::result::Result<(), MailboxClosed> {
        self.rx.changed().await.map_err(|_| MailboxClosed)
    }

    /// Returns true if a frame arrived since the last [`take_latest`](Self::take_latest).
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Takes the newest frame and marks it as seen.
    pub fn take_latest(&mut self) -> Option<Arc<Frame>> {
        self.rx.borrow_and_update().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32, value: u8) -> Frame {
        let pixels = vec![value; width as usize * height as usize * 4];
        Frame::from_image(ImageData::new(width, height, pixels).unwrap())
    }

    #[test]
    fn image_data_rejects_wrong_buffer_length() {
        let result = ImageData::new(2, 2, vec![0; 15]);
        assert!(matches!(result, Err(Error::InvalidFrame(_))));
    }

    #[test]
    fn frame_height_comes_from_pixel_data() {
        let data = ImageData::new(4, 3, vec![0; 48]).unwrap();
        let frame = Frame::new(4, data);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
    }

    #[test]
    fn surface_pixels_borrows_when_widths_match() {
        let frame = solid_frame(2, 2, 9);
        assert!(matches!(frame.surface_pixels(), Cow::Borrowed(_)));
    }

    #[test]
    fn surface_pixels_zero_fills_wider_declared_width() {
        let data = ImageData::new(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let frame = Frame::new(2, data);
        assert_eq!(
            frame.surface_pixels().as_ref(),
            &[1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 0, 0, 0, 0]
        );
    }

    #[test]
    fn surface_pixels_crops_narrower_declared_width() {
        let data = ImageData::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let frame = Frame::new(1, data);
        assert_eq!(frame.surface_pixels().as_ref(), &[1, 2, 3, 4]);
    }

    #[test]
    fn mailbox_keeps_only_the_latest_frame() {
        let (tx, mut rx) = frame_mailbox();
        assert!(rx.take_latest().is_none());

        tx.send(solid_frame(1, 1, 1));
        tx.send(solid_frame(1, 1, 2));
        tx.send(solid_frame(1, 1, 3));

        assert!(rx.has_changed());
        let latest = rx.take_latest().unwrap();
        assert_eq!(latest.data().pixels(), &[3, 3, 3, 3]);
        assert!(!rx.has_changed());
    }

    #[test]
    fn send_succeeds_without_receiver() {
        let (tx, rx) = frame_mailbox();
        drop(rx);
        assert!(tx.is_closed());
        tx.send(solid_frame(1, 1, 0));
    }

    #[tokio::test]
    async fn changed_reports_closed_mailbox() {
        let (tx, mut rx) = frame_mailbox();
        tx.send(solid_frame(1, 1, 5));
        assert!(rx.changed().await.is_ok());
        drop(tx);
        assert_eq!(rx.changed().await, Err(MailboxClosed));
    }
}
