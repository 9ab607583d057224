// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the player session
//!
//! These tests drive a full session (controller, presenter and timeline)
//! through its public input channel, against both a scripted backend and the
//! simulated backend.

use player_sync::application::port::{PlayerBackend, TimelineState};
use player_sync::domain::video::{FrameRate, OutputSize, PlaybackState};
use player_sync::error::{BackendCommand, BackendError};
use player_sync::infrastructure::SimulatedBackend;
use player_sync::ui::layout::ContainerBounds;
use player_sync::video_player::{
    frame_mailbox, session_channel, FocusTarget, Frame, FramePresenter, ImageData, Key, KeyPress,
    PixelSurface, PlaybackController, PlaybackSettings, PlayerInput, Session, Timeline,
};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Start,
    Stop,
    Seek(u32),
}

/// Backend that records commands and can refuse one kind of command.
#[derive(Debug, Default)]
struct ScriptedBackend {
    calls: Mutex<Vec<Call>>,
    refuse: Option<BackendCommand>,
}

impl ScriptedBackend {
    fn refusing(command: BackendCommand) -> Self {
        Self {
            refuse: Some(command),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, command: BackendCommand) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        if self.refuse == Some(command) {
            return Err(BackendError::rejected(command, "refused by test"));
        }
        Ok(())
    }
}

impl PlayerBackend for ScriptedBackend {
    async fn start_playback(&self, _: FrameRate, _: OutputSize) -> Result<(), BackendError> {
        self.record(Call::Start, BackendCommand::Start)
    }

    async fn stop_playback(&self) -> Result<(), BackendError> {
        self.record(Call::Stop, BackendCommand::Stop)
    }

    async fn seek_to(&self, frame_index: u32) -> Result<(), BackendError> {
        self.record(Call::Seek(frame_index), BackendCommand::Seek)
    }
}

fn scripted_session(
    backend: ScriptedBackend,
    duration: f64,
) -> (
    Session<ScriptedBackend, Timeline, PixelSurface>,
    player_sync::video_player::SessionHandle,
) {
    let (_frames_tx, frames_rx) = frame_mailbox();
    let (handle, inbox) = session_channel();
    let controller =
        PlaybackController::new(backend, Timeline::new(duration), PlaybackSettings::default());
    let presenter = FramePresenter::new(frames_rx, PixelSurface::new());
    let (session, _snapshots) = Session::new(controller, presenter, inbox);
    (session, handle)
}

#[tokio::test]
async fn test_play_until_end_then_restart() {
    let (session, handle) = scripted_session(ScriptedBackend::default(), 3.0);

    handle.send(PlayerInput::TogglePlayback).unwrap();
    for step in 1..=30 {
        handle
            .send(PlayerInput::PlaybackTime(f64::from(step) * 0.1))
            .unwrap();
    }
    handle.send(PlayerInput::TogglePlayback).unwrap();
    handle.send(PlayerInput::Shutdown).unwrap();

    let session = session.run().await;
    assert_eq!(
        session.controller().backend().calls(),
        vec![Call::Start, Call::Stop, Call::Stop, Call::Seek(0), Call::Start]
    );
    assert_eq!(session.controller().state(), PlaybackState::Playing);
    assert_eq!(session.controller().timeline().playback_time(), 0.0);
}

#[tokio::test]
async fn test_space_scrub_commit_and_seek() {
    let (session, handle) = scripted_session(ScriptedBackend::default(), 10.0);

    handle.send(PlayerInput::PreviewTime(Some(2.5))).unwrap();
    handle
        .send(PlayerInput::Key(KeyPress::new(Key::Space, FocusTarget::Body)))
        .unwrap();
    handle
        .send(PlayerInput::Key(KeyPress::new(Key::Space, FocusTarget::Control)))
        .unwrap();
    handle.send(PlayerInput::Shutdown).unwrap();

    let session = session.run().await;
    assert_eq!(
        session.controller().backend().calls(),
        vec![Call::Seek(75), Call::Start]
    );
    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, PlaybackState::Playing);
    assert_eq!(snapshot.current_time, 2.5);
}

#[tokio::test]
async fn test_refused_start_resolves_to_stopped() {
    let (_frames_tx, frames_rx) = frame_mailbox();
    let (handle, inbox) = session_channel();
    let controller = PlaybackController::new(
        ScriptedBackend::refusing(BackendCommand::Start),
        Timeline::new(10.0),
        PlaybackSettings::default(),
    );
    let presenter = FramePresenter::new(frames_rx, PixelSurface::new());
    let (session, _snapshots) = Session::new(controller, presenter, inbox);

    handle.send(PlayerInput::TogglePlayback).unwrap();
    handle.send(PlayerInput::TogglePlayback).unwrap();
    handle.send(PlayerInput::Shutdown).unwrap();

    let session = session.run().await;
    assert_eq!(
        session.controller().backend().calls(),
        vec![Call::Start, Call::Start]
    );
    assert_eq!(session.controller().state(), PlaybackState::Stopped);

    let snapshot = session.snapshot();
    assert!(snapshot.shows_play_button());
    assert_eq!(snapshot.frames_presented, 0);
    assert_eq!(snapshot.frame_size, None);
    assert!(session.presenter().surface().is_blank());
}

#[tokio::test]
async fn test_jump_buttons() {
    let (session, handle) = scripted_session(ScriptedBackend::default(), 8.0);

    handle.send(PlayerInput::Play).unwrap();
    handle.send(PlayerInput::GoToEnd).unwrap();
    handle.send(PlayerInput::GoToStart).unwrap();
    handle.send(PlayerInput::Shutdown).unwrap();

    let session = session.run().await;
    assert_eq!(
        session.controller().backend().calls(),
        vec![Call::Start, Call::Stop, Call::Stop]
    );
    assert_eq!(session.controller().state(), PlaybackState::Stopped);
    assert_eq!(session.controller().timeline().playback_time(), 0.0);
}

#[tokio::test]
async fn test_latest_frame_wins() {
    let (frames_tx, frames_rx) = frame_mailbox();
    let (handle, inbox) = session_channel();
    let controller = PlaybackController::new(
        ScriptedBackend::default(),
        Timeline::new(10.0),
        PlaybackSettings::default(),
    );
    let presenter = FramePresenter::new(frames_rx, PixelSurface::new());
    let (session, _snapshots) = Session::new(controller, presenter, inbox);

    // Queued before the session ever runs: only the newest survives.
    for width in 1..=5u32 {
        let data = ImageData::new(width, 1, vec![0; (width * 4) as usize]).unwrap();
        frames_tx.send(Frame::from_image(data));
    }
    handle
        .send(PlayerInput::Resize(ContainerBounds::new(800.0, 600.0)))
        .unwrap();

    let task = tokio::spawn(session.run());
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.send(PlayerInput::Shutdown).unwrap();
    let session = task.await.unwrap();

    assert_eq!(session.presenter().frames_presented(), 1);
    assert_eq!(session.snapshot().frame_size, Some((5, 1)));
    assert!(session.snapshot().layout.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_simulated_backend_plays_to_the_end() {
    let (frames_tx, frames_rx) = frame_mailbox();
    let (handle, inbox) = session_channel();
    let settings = PlaybackSettings {
        frame_rate: FrameRate::new(10),
        output_size: OutputSize::new(8, 6),
        ..PlaybackSettings::default()
    };
    let backend = SimulatedBackend::new(frames_tx, handle.clone(), 1.0, settings.frame_rate);
    let controller = PlaybackController::new(backend, Timeline::new(1.0), settings);
    let presenter = FramePresenter::new(frames_rx, PixelSurface::new());
    let (session, mut snapshots) = Session::new(controller, presenter, inbox);
    let task = tokio::spawn(session.run());

    handle
        .send(PlayerInput::Resize(ContainerBounds::new(400.0, 300.0)))
        .unwrap();
    handle.send(PlayerInput::Play).unwrap();

    let ended = snapshots
        .wait_for(|s| s.state == PlaybackState::EndReached)
        .await
        .map(|s| *s)
        .unwrap();
    assert!(ended.shows_play_button());
    assert!(ended.frames_presented > 0);
    assert_eq!(ended.frame_size, Some((8, 6)));

    handle.send(PlayerInput::Shutdown).unwrap();
    let session = task.await.unwrap();
    assert!(!session.controller().backend().is_running());
    assert!(!session.controller().is_playing());
}
