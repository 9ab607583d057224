// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the playback engine is written against.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The video player engine consumes the ports generically

pub mod port;
