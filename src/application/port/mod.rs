// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces for the collaborators the player
//! coordinates but does not own. These traits use only domain types, so the
//! playback engine stays independent of concrete backends and timelines.
//!
//! # Available Ports
//!
//! - [`backend`]: Remote player backend commands (start, stop, seek)
//! - [`timeline`]: Timeline state (playback, preview, duration, zoom)
//!
//! # Design Notes
//!
//! - Backend commands are `async` and fallible; callers decide how to recover
//! - Timeline access is synchronous: it is plain UI state
//! - Frame delivery is not a port method, it goes through the frame mailbox

pub mod backend;
pub mod timeline;

// Re-export main types for convenience
pub use backend::PlayerBackend;
pub use timeline::TimelineState;
