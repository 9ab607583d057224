// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: In-process backend producing synthetic frames (implements [`PlayerBackend`])
//!
//! [`PlayerBackend`]: crate::application::port::PlayerBackend

pub mod simulated;

pub use simulated::SimulatedBackend;
