// SPDX-License-Identifier: MPL-2.0
//! Simulated player backend.
//!
//! Stands in for the remote renderer: on `start` it spawns a Tokio task that
//! paints a synthetic frame every `1 / fps` seconds into the frame mailbox
//! and reports the matching playback time to the session. `stop` aborts the
//! task; `seek` moves the read cursor.

use crate::application::port::PlayerBackend;
use crate::domain::video::{FrameRate, OutputSize};
use crate::error::{BackendCommand, BackendError};
use crate::video_player::frame::{Frame, FrameSender, ImageData};
use crate::video_player::session::{PlayerInput, SessionHandle};
use crate::video_player::time_units::{frame_index_to_secs, secs_to_frame_index};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug)]
struct Playhead {
    cursor: u32,
    frame_rate: FrameRate,
    task: Option<JoinHandle<()>>,
}

/// In-process backend producing synthetic frames on a timer.
#[derive(Debug)]
pub struct SimulatedBackend {
    frames: FrameSender,
    session: SessionHandle,
    duration_secs: f64,
    playhead: Arc<Mutex<Playhead>>,
}

impl SimulatedBackend {
    /// Creates a stopped backend for media of `duration_secs` seconds.
    pub fn new(
        frames: FrameSender,
        session: SessionHandle,
        duration_secs: f64,
        frame_rate: FrameRate,
    ) -> Self {
        Self {
            frames,
            session,
            duration_secs: duration_secs.max(0.0),
            playhead: Arc::new(Mutex::new(Playhead {
                cursor: 0,
                frame_rate,
                task: None,
            })),
        }
    }

    /// Returns true while the frame task is running.
    pub fn is_running(&self) -> bool {
        self.lock()
            .ok()
            .and_then(|p| p.task.as_ref().map(|t| !t.is_finished()))
            .unwrap_or(false)
    }

    /// Index of the next frame to be produced.
    pub fn cursor(&self) -> Option<u32> {
        self.lock().ok().map(|p| p.cursor)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Playhead>, BackendError> {
        self.playhead.lock().map_err(|_| BackendError::Disconnected)
    }
}

/// Builds a solid-color frame whose tint cycles with the frame index.
fn synthetic_frame(index: u32, size: OutputSize) -> Option<Frame> {
    let shade = (index % 256) as u8;
    let pixel = [shade, 255 - shade, shade / 2, 255];
    let count = size.width() as usize * size.height() as usize;
    let data = ImageData::new(size.width(), size.height(), pixel.repeat(count)).ok()?;
    Some(Frame::from_image(data))
}

async fn produce_frames(
    playhead: Arc<Mutex<Playhead>>,
    frames: FrameSender,
    session: SessionHandle,
    frame_rate: FrameRate,
    output_size: OutputSize,
    duration_secs: f64,
) {
    let mut ticker = tokio::time::interval(Duration::from_secs_f64(frame_rate.frame_duration_secs()));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let index = {
            let Ok(mut playhead) = playhead.lock() else {
                break;
            };
            let index = playhead.cursor;
            playhead.cursor = index.saturating_add(1);
            index
        };

        let secs = frame_index_to_secs(index, frame_rate).min(duration_secs);
        if let Some(frame) = synthetic_frame(index, output_size) {
            frames.send(frame);
        }
        if session.send(PlayerInput::PlaybackTime(secs)).is_err() {
            log::debug!("session closed, stopping simulated playback");
            break;
        }
        if secs >= duration_secs {
            log::debug!("simulated playback reached {duration_secs:.3}s");
            break;
        }
    }
}

impl PlayerBackend for SimulatedBackend {
    async fn start_playback(
        &self,
        frame_rate: FrameRate,
        output_size: OutputSize,
    ) -> Result<(), BackendError> {
        let mut playhead = self.lock()?;
        if let Some(task) = playhead.task.take() {
            task.abort();
        }
        playhead.frame_rate = frame_rate;

        log::debug!(
            "simulated backend starting at frame {} ({} fps, {}x{})",
            playhead.cursor,
            frame_rate.value(),
            output_size.width(),
            output_size.height()
        );
        playhead.task = Some(tokio::spawn(produce_frames(
            Arc::clone(&self.playhead),
            self.frames.clone(),
            self.session.clone(),
            frame_rate,
            output_size,
            self.duration_secs,
        )));
        Ok(())
    }

    async fn stop_playback(&self) -> Result<(), BackendError> {
        if let Some(task) = self.lock()?.task.take() {
            task.abort();
            log::debug!("simulated backend stopped");
        }
        Ok(())
    }

    async fn seek_to(&self, frame_index: u32) -> Result<(), BackendError> {
        let mut playhead = self.lock()?;
        let last_frame = secs_to_frame_index(self.duration_secs, playhead.frame_rate);
        if frame_index > last_frame {
            return Err(BackendError::rejected(
                BackendCommand::Seek,
                format!("frame {frame_index} is past the last frame {last_frame}"),
            ));
        }
        playhead.cursor = frame_index;
        Ok(())
    }
}

impl Drop for SimulatedBackend {
    fn drop(&mut self) {
        if let Ok(mut playhead) = self.playhead.lock() {
            if let Some(task) = playhead.task.take() {
                task.abort();
            }
        }
    }
}
