// SPDX-License-Identifier: MPL-2.0
//! `player_sync` keeps a video editor's player view in step with a remote
//! player backend.
//!
//! It provides the playback state machine, latest-wins frame delivery and
//! letterboxed presentation, and the time and zoom readouts of the player,
//! organized in domain, application (ports), engine, and adapter layers.

#![doc(html_root_url = "https://docs.rs/player_sync/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod video_player;

#[cfg(test)]
mod test_utils;
