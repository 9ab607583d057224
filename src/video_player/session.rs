// SPDX-License-Identifier: MPL-2.0
//! Player session: the single event loop that owns the controller.
//!
//! UI events and backend clock updates arrive as [`PlayerInput`] over an
//! unbounded channel and are applied strictly one at a time, so two commands
//! never race on the playing flag. Frames are a separate stream: while a
//! backend command is awaited the session keeps draining the frame mailbox,
//! so the picture never freezes behind a slow command.
//!
//! After every input the end-of-media detector is re-run and a fresh
//! [`PlayerSnapshot`] is published for observers.

use super::controller::PlaybackController;
use super::presenter::{FramePresenter, PresentationSurface};
use crate::application::port::{PlayerBackend, TimelineState};
use crate::domain::video::PlaybackState;
use crate::error::{Error, Result};
use crate::ui::layout::{ContainerBounds, LayoutRect};
use crate::video_player::input::KeyPress;
use tokio::sync::{mpsc, watch};

/// Everything the session reacts to, besides frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Play/pause button.
    TogglePlayback,
    Play,
    Pause,
    Key(KeyPress),
    GoToStart,
    GoToEnd,
    /// Backend clock update (seconds).
    PlaybackTime(f64),
    /// Scrub hover position, `None` when the pointer leaves the timeline.
    PreviewTime(Option<f64>),
    /// Media length became known or changed.
    TotalDuration(f64),
    /// Zoom slider moved to a position in `[0, 1]`.
    ZoomSlider(f64),
    /// Player viewport was resized.
    Resize(ContainerBounds),
    Shutdown,
}

/// Creates the input channel of a session.
#[must_use]
pub fn session_channel() -> (SessionHandle, SessionInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SessionHandle { tx }, SessionInbox { rx })
}

/// Sending side of the session input channel.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<PlayerInput>,
}

impl SessionHandle {
    /// Queues an input for the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] if the session loop has ended.
    pub fn send(&self, input: PlayerInput) -> Result<()> {
        self.tx.send(input).map_err(|_| Error::SessionClosed)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving side of the session input channel.
#[derive(Debug)]
pub struct SessionInbox {
    rx: mpsc::UnboundedReceiver<PlayerInput>,
}

impl SessionInbox {
    /// Waits for the next input; `None` once every handle is gone.
    pub async fn recv(&mut self) -> Option<PlayerInput> {
        self.rx.recv().await
    }

    /// Takes the next queued input without waiting.
    pub fn try_recv(&mut self) -> Option<PlayerInput> {
        self.rx.try_recv().ok()
    }
}

/// Observable state published after every input and every presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    /// Preview time if scrubbing, playback time otherwise.
    pub current_time: f64,
    pub total_duration: f64,
    /// Zoom slider position in `[0, 1]`.
    pub zoom_slider: f64,
    /// Letterboxed frame placement inside the current viewport.
    pub layout: Option<LayoutRect>,
    /// Dimensions of the frame on screen.
    pub frame_size: Option<(u32, u32)>,
    pub frames_presented: u64,
}

impl PlayerSnapshot {
    /// Whether the transport button should show "play".
    #[must_use]
    pub fn shows_play_button(&self) -> bool {
        !self.state.is_playing()
    }
}

/// Owns the controller and the presenter, and applies inputs in order.
pub struct Session<B, T, S> {
    controller: PlaybackController<B, T>,
    presenter: FramePresenter<S>,
    inbox: SessionInbox,
    bounds: ContainerBounds,
    snapshot: watch::Sender<PlayerSnapshot>,
}

impl<B, T, S> Session<B, T, S>
where
    B: PlayerBackend,
    T: TimelineState,
    S: PresentationSurface + Send,
{
    /// Creates a session and the receiver its snapshots are published on.
    pub fn new(
        controller: PlaybackController<B, T>,
        presenter: FramePresenter<S>,
        inbox: SessionInbox,
    ) -> (Self, watch::Receiver<PlayerSnapshot>) {
        let (snapshot, snapshots) = watch::channel(PlayerSnapshot::default());
        let session = Self {
            controller,
            presenter,
            inbox,
            bounds: ContainerBounds::default(),
            snapshot,
        };
        session.publish();
        (session, snapshots)
    }

    /// Runs until [`PlayerInput::Shutdown`] or until every handle is dropped.
    ///
    /// Returns the session so its final state can be inspected.
    pub async fn run(mut self) -> Self {
        log::debug!("player session started");
        loop {
            tokio::select! {
                input = self.inbox.recv() => match input {
                    None | Some(PlayerInput::Shutdown) => break,
                    Some(input) => self.dispatch(input).await,
                },
                presented = self.presenter.next_frame(), if self.presenter.is_connected() => {
                    if presented {
                        self.publish();
                    }
                }
            }
        }
        log::debug!(
            "player session stopped after {} frames",
            self.presenter.frames_presented()
        );
        self
    }

    async fn dispatch(&mut self, input: PlayerInput) {
        let before = self.controller.state();

        if let PlayerInput::Resize(bounds) = input {
            self.bounds = bounds;
        } else {
            let presenter = &mut self.presenter;
            let command = apply(&mut self.controller, input);
            tokio::pin!(command);
            loop {
                tokio::select! {
                    () = &mut command => break,
                    _ = presenter.next_frame(), if presenter.is_connected() => {}
                }
            }
        }

        let after = self.controller.state();
        if before != after {
            log::info!("playback state {before:?} -> {after:?}");
        }
        self.publish();
    }

    fn publish(&self) {
        let next = self.snapshot();
        self.snapshot.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// Builds a snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        let padding = self.controller.settings().frame_padding;
        PlayerSnapshot {
            state: self.controller.state(),
            current_time: self.controller.current_time(),
            total_duration: self.controller.timeline().total_duration(),
            zoom_slider: self.controller.zoom_slider().value(),
            layout: self.presenter.layout(self.bounds, padding),
            frame_size: self.presenter.frame().map(|f| (f.width(), f.height())),
            frames_presented: self.presenter.frames_presented(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &PlaybackController<B, T> {
        &self.controller
    }

    #[must_use]
    pub fn presenter(&self) -> &FramePresenter<S> {
        &self.presenter
    }

    #[must_use]
    pub fn bounds(&self) -> ContainerBounds {
        self.bounds
    }
}

async fn apply<B, T>(controller: &mut PlaybackController<B, T>, input: PlayerInput)
where
    B: PlayerBackend,
    T: TimelineState,
{
    match input {
        PlayerInput::TogglePlayback => {
            controller.toggle().await;
        }
        PlayerInput::Play => {
            controller.play().await;
        }
        PlayerInput::Pause => {
            controller.pause().await;
        }
        PlayerInput::Key(key) => {
            controller.handle_key(key).await;
        }
        PlayerInput::GoToStart => controller.go_to_start().await,
        PlayerInput::GoToEnd => controller.go_to_end().await,
        PlayerInput::PlaybackTime(secs) => controller.timeline_mut().set_playback_time(secs),
        PlayerInput::PreviewTime(secs) => controller.timeline_mut().set_preview_time(secs),
        PlayerInput::TotalDuration(secs) => controller.timeline_mut().set_total_duration(secs),
        PlayerInput::ZoomSlider(value) => controller.set_zoom_slider(value),
        PlayerInput::Resize(_) | PlayerInput::Shutdown => {}
    }
    controller.on_timeline_changed().await;
}
