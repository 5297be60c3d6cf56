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

use anyhow::Result;

use crate::{
    browser::Browser,
    player::{MediaStatus, PlaybackEngine, PlayerState},
};

impl<P: PlaybackEngine> Browser<P> {
    pub(crate) fn player_state(&self) -> PlayerState {
        self.player.state()
    }

    /// Elapsed time of the loaded source, in whole seconds.
    pub(crate) fn position(&self) -> u64 {
        self.position
    }

    /// Total time of the loaded source in whole seconds, zero until known.
    pub(crate) fn duration(&self) -> u64 {
        self.duration
    }

    pub(crate) fn volume(&self) -> u8 {
        self.volume
    }

    /// Plays the loaded source if it is not playing, otherwise pauses it.
    pub(crate) fn toggle_play(&mut self) -> Result<()> {
        if !self.controls.play {
            return Ok(());
        }

        match self.player.state() {
            PlayerState::Playing => self.player.pause(),
            PlayerState::Paused | PlayerState::Stopped => self.player.play(),
        }
    }

    /// Moves playback to an absolute offset, clamped to the known duration.
    pub(crate) fn seek_to(&mut self, seconds: u64) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }

        let target = match self.duration {
            0 => seconds,
            duration => seconds.min(duration),
        };

        self.player.seek(target * 1000)?;
        self.position = target;

        Ok(())
    }

    pub(crate) fn seek_by(&mut self, delta_seconds: i64) -> Result<()> {
        let target = self.position.saturating_add_signed(delta_seconds);
        self.seek_to(target)
    }

    /// Sets the volume as a percentage, anything above 100 is treated as 100.
    pub(crate) fn set_volume(&mut self, percent: u8) -> Result<()> {
        let percent = percent.min(100);
        self.player.set_volume(f64::from(percent) / 100.0)?;
        self.volume = percent;

        Ok(())
    }

    pub(crate) fn change_volume(&mut self, delta: i16) -> Result<()> {
        let target = (i16::from(self.volume) + delta).clamp(0, 100);
        self.set_volume(target as u8)
    }

    pub(crate) fn mute(&mut self) -> Result<()> {
        self.set_volume(0)
    }

    pub(crate) fn reset_volume(&mut self) -> Result<()> {
        self.set_volume(self.default_volume)
    }

    /// Samples the engine position. Only a playing engine moves the slider.
    pub(crate) fn on_tick(&mut self) {
        if self.player.state() == PlayerState::Playing {
            self.position = self.player.position_ms() / 1000;
        }
    }

    pub(crate) fn on_media_status(&mut self, status: MediaStatus) {
        match status {
            MediaStatus::Loaded { duration_ms } => {
                self.duration = duration_ms / 1000;
            }
            MediaStatus::Finished => {
                log::debug!("Reached the end of the current track");

                // Reload the same source so it can be played again.
                let audio = self
                    .current_track()
                    .map(|track| self.paths.resolve(&track.audio_path));
                let duration = self.duration;
                match audio {
                    Some(audio) => {
                        self.load_audio(&audio);
                        self.duration = duration;
                    }
                    None => self.position = 0,
                }
            }
        }
    }
}
