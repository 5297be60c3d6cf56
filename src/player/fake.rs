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

//! A recording playback engine for tests.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::player::{PlaybackEngine, PlayerState};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EngineCall {
    Load(PathBuf),
    Unload,
    Play,
    Pause,
    Stop,
    Seek(u64),
    SetVolume(f64),
}

/// Applies every command synchronously and remembers it.
#[derive(Debug, Default)]
pub(crate) struct FakeEngine {
    pub(crate) calls: Vec<EngineCall>,
    pub(crate) source: Option<PathBuf>,
    pub(crate) state: PlayerState,
    pub(crate) position_ms: u64,
    pub(crate) fail_loads: bool,
}

impl FakeEngine {
    pub(crate) fn loads(&self) -> Vec<&Path> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::Load(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

impl PlaybackEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<()> {
        self.calls.push(EngineCall::Load(path.to_path_buf()));
        if self.fail_loads {
            anyhow::bail!("Unsupported media: {}", path.display());
        }
        self.source = Some(path.to_path_buf());
        self.state = PlayerState::Stopped;
        self.position_ms = 0;
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.calls.push(EngineCall::Unload);
        self.source = None;
        self.state = PlayerState::Stopped;
        self.position_ms = 0;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(EngineCall::Play);
        if self.source.is_some() {
            self.state = PlayerState::Playing;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push(EngineCall::Pause);
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Paused;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.calls.push(EngineCall::Stop);
        self.state = PlayerState::Stopped;
        self.position_ms = 0;
        Ok(())
    }

    fn seek(&mut self, position_ms: u64) -> Result<()> {
        self.calls.push(EngineCall::Seek(position_ms));
        self.position_ms = position_ms;
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.calls.push(EngineCall::SetVolume(volume));
        Ok(())
    }

    fn position_ms(&self) -> u64 {
        self.position_ms
    }

    fn state(&self) -> PlayerState {
        self.state
    }
}
