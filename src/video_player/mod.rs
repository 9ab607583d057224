// SPDX-License-Identifier: MPL-2.0
//! Playback synchronization engine.
//!
//! Keeps the UI's notion of "playing" in line with a remote player backend
//! that renders frames on command. The [`PlaybackController`] issues start,
//! stop and seek commands; frames come back through a latest-wins mailbox
//! and are painted by a [`FramePresenter`]; a [`Session`] ties both together
//! in a single event loop.

pub mod controller;
pub mod frame;
pub mod input;
pub mod presenter;
pub mod session;
pub mod time_units;
pub mod timeline;

pub use controller::{PlaybackController, PlaybackSettings};
pub use frame::{frame_mailbox, Frame, FrameReceiver, FrameSender, ImageData, MailboxClosed};
pub use input::{FocusTarget, Key, KeyPress};
pub use presenter::{FramePresenter, PixelSurface, PresentationSurface};
pub use session::{session_channel, PlayerInput, PlayerSnapshot, Session, SessionHandle, SessionInbox};
pub use time_units::{frame_index_to_secs, secs_to_frame_index};
pub use timeline::{Timeline, TimelineTransform};
