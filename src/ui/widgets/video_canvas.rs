// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering presented frames.
//!
//! This module provides an iced-backed [`PresentationSurface`]: the presenter
//! paints frames into it, and the view places the frame inside the
//! letterboxed rectangle computed by [`compute_layout`].

use crate::ui::layout::{compute_layout, ContainerBounds, LayoutRect};
use crate::video_player::frame::Frame;
use crate::video_player::presenter::PresentationSurface;
use iced::widget::{container, image, Container};
use iced::{Color, ContentFit, Element, Length, Padding};

/// Video frame widget.
///
/// Renders RGBA frame data using Iced's Image widget.
/// Creates a new `image::Handle` whenever a frame is painted.
pub struct VideoCanvas<Message> {
    /// Current frame as image handle.
    frame_handle: Option<image::Handle>,

    /// Surface dimensions (declared frame width, buffer height).
    width: u32,
    height: u32,

    _phantom: std::marker::PhantomData<fn() -> Message>,
}

impl<Message> VideoCanvas<Message> {
    /// Creates a new, blank video canvas.
    pub fn new() -> Self {
        Self {
            frame_handle: None,
            width: 0,
            height: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the canvas has a frame to display.
    pub fn has_frame(&self) -> bool {
        self.frame_handle.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Letterboxed placement of the frame inside `bounds`.
    pub fn layout(&self, bounds: ContainerBounds, padding: f32) -> Option<LayoutRect> {
        if !self.has_frame() {
            return None;
        }
        compute_layout(self.width, self.height, bounds, padding)
    }

    /// Renders the frame, offset and sized to its letterboxed rectangle.
    pub fn view<'a>(&'a self, bounds: ContainerBounds, padding: f32) -> Element<'a, Message>
    where
        Message: 'a,
    {
        match (&self.frame_handle, self.layout(bounds, padding)) {
            (Some(handle), Some(rect)) => {
                let img = image::Image::new(handle.clone())
                    .content_fit(ContentFit::Fill)
                    .width(Length::Fixed(rect.width.max(1.0)))
                    .height(Length::Fixed(rect.height.max(1.0)));

                container(img)
                    .padding(Padding {
                        top: rect.y,
                        right: 0.0,
                        bottom: 0.0,
                        left: rect.x,
                    })
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
            _ => {
                // No frame yet, show placeholder
                let placeholder: Container<'_, Message> = container(iced::widget::text(""))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(|_theme: &iced::Theme| container::Style {
                        background: Some(Color::from_rgb(0.1, 0.1, 0.1).into()),
                        ..Default::default()
                    });

                placeholder.into()
            }
        }
    }
}

impl<Message> PresentationSurface for VideoCanvas<Message> {
    fn put_frame(&mut self, frame: &Frame) {
        let pixels = frame.surface_pixels().into_owned();
        self.frame_handle = Some(image::Handle::from_rgba(
            frame.width(),
            frame.height(),
            pixels,
        ));
        self.width = frame.width();
        self.height = frame.height();
    }
}

impl<Message> Default for VideoCanvas<Message> {
    fn default() -> Self {
        Self::new()
    }
}
