// SPDX-License-Identifier: MPL-2.0
//! Remote player backend port definition.
//!
//! This module defines the [`PlayerBackend`] trait for the process that
//! decodes and renders frames on command. Infrastructure adapters implement
//! it; the playback controller only ever talks to this trait.
//!
//! # Design Notes
//!
//! - Every command is asynchronous and may fail with a [`BackendError`]
//! - `stop_playback` must be idempotent: stopping a stopped backend is a no-op
//! - Frames are not returned from these calls; they are pushed through a
//!   separate [`FrameSender`](crate::video_player::FrameSender) mailbox
//! - There is no cancellation: a later command (e.g. stop after start) is the
//!   only way to supersede an earlier one

use crate::domain::video::{FrameRate, OutputSize};
use crate::error::BackendError;
use std::future::Future;

// =============================================================================
// PlayerBackend Trait
// =============================================================================

/// Port for the remote player backend.
///
/// Methods take `&self` so that commands may overlap while a previous one is
/// still in flight; implementations handle their own synchronization.
///
/// # Example
///
/// ```ignore
/// use player_sync::application::port::PlayerBackend;
/// use player_sync::domain::video::{FrameRate, OutputSize};
///
/// async fn restart(backend: &impl PlayerBackend) {
///     backend.stop_playback().await.ok();
///     backend.seek_to(0).await.ok();
///     backend
///         .start_playback(FrameRate::default(), OutputSize::default())
///         .await
///         .ok();
/// }
/// ```
pub trait PlayerBackend: Send + Sync {
    /// Starts producing frames at `frame_rate`, rendered at `output_size`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend refuses to start or cannot
    /// be reached.
    fn start_playback(
        &self,
        frame_rate: FrameRate,
        output_size: OutputSize,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Halts frame production. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend cannot be reached.
    fn stop_playback(&self) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Repositions the backend's read cursor to `frame_index`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the seek is rejected.
    fn seek_to(&self, frame_index: u32) -> impl Future<Output = Result<(), BackendError>> + Send;
}
