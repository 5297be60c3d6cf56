// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Audio playback control and state management.
//!
//! This module defines the [`PlaybackEngine`] interface used by the library
//! browser to control music playback. The browser never decodes audio itself,
//! it only issues commands to an engine and reads back the position and
//! state. The production engine is [`MpvEngine`], backed by libmpv.

#[cfg(test)]
pub(crate) mod fake;
mod mpv_engine;

use std::path::Path;

use anyhow::Result;

pub(crate) use self::mpv_engine::MpvEngine;

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

/// Notifications raised by the engine about the loaded media.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MediaStatus {
    /// The source finished loading and its total duration is known.
    Loaded { duration_ms: u64 },
    /// Playback reached the end of the source.
    Finished,
}

/// A media playback engine.
///
/// Loading a source never starts playback. Positions are absolute offsets in
/// milliseconds, volume is a fraction in `0.0..=1.0`.
pub(crate) trait PlaybackEngine {
    /// Replaces the current source with a local file.
    fn load(&mut self, path: &Path) -> Result<()>;

    /// Drops the current source.
    fn unload(&mut self) -> Result<()>;

    fn play(&mut self) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    /// Stops playback and rewinds to the start, keeping the source.
    fn stop(&mut self) -> Result<()>;

    fn seek(&mut self, position_ms: u64) -> Result<()>;

    fn set_volume(&mut self, volume: f64) -> Result<()>;

    fn position_ms(&self) -> u64;

    fn state(&self) -> PlayerState;
}

// Maps internal audio backend flags to a simplified [`PlayerState`].
fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
    if is_idle {
        PlayerState::Stopped
    } else if is_paused {
        PlayerState::Paused
    } else {
        PlayerState::Playing
    }
}
