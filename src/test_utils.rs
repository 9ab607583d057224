// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides [`RecordingBackend`], a scriptable [`PlayerBackend`] that
//! records every command it receives.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::PlayerBackend;
use crate::domain::video::{FrameRate, OutputSize};
use crate::error::{BackendCommand, BackendError};
use std::sync::Mutex;
use std::time::Duration;

/// A command as seen by [`RecordingBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCall {
    Start { fps: u32, width: u32, height: u32 },
    Stop,
    Seek(u32),
}

/// Backend double that records calls and fails on demand.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    failures: Mutex<Vec<BackendCommand>>,
    latency: Option<Duration>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command takes `latency` to resolve (use with a paused clock).
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Makes the next `command` fail with a rejection.
    pub fn fail_next(&self, command: BackendCommand) {
        self.failures.lock().unwrap().push(command);
    }

    async fn record(&self, call: BackendCall, command: BackendCommand) -> Result<(), BackendError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.calls.lock().unwrap().push(call);

        let mut failures = self.failures.lock().unwrap();
        if let Some(index) = failures.iter().position(|c| *c == command) {
            failures.remove(index);
            return Err(BackendError::rejected(command, "scripted failure"));
        }
        Ok(())
    }
}

impl PlayerBackend for RecordingBackend {
    async fn start_playback(
        &self,
        frame_rate: FrameRate,
        output_size: OutputSize,
    ) -> Result<(), BackendError> {
        let call = BackendCall::Start {
            fps: frame_rate.value(),
            width: output_size.width(),
            height: output_size.height(),
        };
        self.record(call, BackendCommand::Start).await
    }

    async fn stop_playback(&self) -> Result<(), BackendError> {
        self.record(BackendCall::Stop, BackendCommand::Stop).await
    }

    async fn seek_to(&self, frame_index: u32) -> Result<(), BackendError> {
        self.record(BackendCall::Seek(frame_index), BackendCommand::Seek)
            .await
    }
}
