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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the production [`PlaybackEngine`], leveraging
//! `libmpv` for audio decoding and playback. It manages a background worker
//! thread that bridges the gap between the engine's command-based interface
//! and the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`EngineCommand`]s from the browser to
//!    control playback (load, play, pause, seek, etc.).
//! 2. **Event Channel**: Broadcasts [`MediaStatus`] notifications to the
//!    application as [`AppEvent`]s.
//!
//! Position and play state are continuously observed by the worker and kept
//! in a shared snapshot, so reading them never blocks on the worker.

use std::{
    path::Path,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};

use anyhow::{Context, Result};
use mpv::Format;

use crate::{
    events::AppEvent,
    player::{MediaStatus, PlaybackEngine, PlayerState, player_state},
};

#[derive(Debug)]
enum EngineCommand {
    Load(String),
    Unload,
    Play,
    Pause,
    Stop,
    Seek(u64),
    SetVolume(f64),
}

#[derive(Debug, Default)]
struct Snapshot {
    state: PlayerState,
    position_ms: u64,
}

/// A handle to the MPV playback worker.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct MpvEngine {
    command_tx: Sender<EngineCommand>,
    snapshot: Arc<Mutex<Snapshot>>,
    stopped: bool,
}

impl MpvEngine {
    /// Spawns the audio worker thread and returns a new engine handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send media status notifications and fatal
    ///   errors back to the main event loop.
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<EngineCommand>();
        let snapshot = Arc::new(Mutex::new(Snapshot::default()));

        spawn_player_worker(command_rx, event_tx, Arc::clone(&snapshot));

        Self {
            command_tx,
            snapshot,
            stopped: true,
        }
    }

    fn send(&self, command: EngineCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .context("Playback engine is no longer running")
    }
}

impl PlaybackEngine for MpvEngine {
    fn load(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            anyhow::bail!("Media source not found: {}", path.display());
        }

        let filename = path
            .to_str()
            .context("Media path contains invalid UTF-8")?
            .to_string();

        self.stopped = true;
        self.send(EngineCommand::Load(filename))
    }

    fn unload(&mut self) -> Result<()> {
        self.stopped = true;
        self.send(EngineCommand::Unload)
    }

    fn play(&mut self) -> Result<()> {
        self.stopped = false;
        self.send(EngineCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(EngineCommand::Pause)
    }

    fn stop(&mut self) -> Result<()> {
        self.stopped = true;
        self.send(EngineCommand::Stop)
    }

    fn seek(&mut self, position_ms: u64) -> Result<()> {
        self.send(EngineCommand::Seek(position_ms))
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.send(EngineCommand::SetVolume(volume.clamp(0.0, 1.0)))
    }

    fn position_ms(&self) -> u64 {
        self.snapshot.lock().map(|s| s.position_ms).unwrap_or(0)
    }

    fn state(&self) -> PlayerState {
        if self.stopped {
            return PlayerState::Stopped;
        }

        self.snapshot
            .lock()
            .map(|s| s.state)
            .unwrap_or(PlayerState::Stopped)
    }
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
fn spawn_player_worker(
    command_rx: Receiver<EngineCommand>,
    event_tx: Sender<AppEvent>,
    snapshot: Arc<Mutex<Snapshot>>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx, snapshot) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining incoming commands and waiting briefly for MPV events. It returns
/// once the command channel is closed.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the event
/// channel back to the application is closed.
fn audio_player_worker(
    command_rx: Receiver<EngineCommand>,
    event_tx: Sender<AppEvent>,
    snapshot: Arc<Mutex<Snapshot>>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    let mut is_paused = false;
    let mut is_idle = true;

    loop {
        if !process_commands(&mut handler, &command_rx) {
            log::debug!("Playback engine shutting down");
            return Ok(());
        }

        process_mpv_events(
            &mut handler,
            &mut is_paused,
            &mut is_idle,
            &snapshot,
            &event_tx,
        )?;
    }
}

/// Drains and executes all pending commands, returning `false` once the
/// command channel has been closed.
///
/// A failing command is logged and otherwise ignored, the engine stays
/// usable for the next one.
fn process_commands(handler: &mut mpv::MpvHandler, command_rx: &Receiver<EngineCommand>) -> bool {
    loop {
        match command_rx.try_recv() {
            Ok(command) => {
                if let Err(e) = run_command(handler, &command) {
                    log::error!("Playback command {:?} failed: {:#}", command, e);
                }
            }
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        }
    }
}

fn run_command(handler: &mut mpv::MpvHandler, command: &EngineCommand) -> Result<()> {
    match command {
        EngineCommand::Load(filename) => {
            handler.set_property("pause", true)?;
            handler
                .command(&["loadfile", filename.as_str(), "replace"])
                .context(format!("Failed to load file: {}", filename))?;
        }
        EngineCommand::Unload => {
            handler.command(&["stop"])?;
        }
        EngineCommand::Play => {
            handler.set_property("pause", false)?;
        }
        EngineCommand::Pause => {
            handler.set_property("pause", true)?;
        }
        EngineCommand::Stop => {
            handler.set_property("pause", true)?;
            handler.command(&["seek", "0", "absolute"])?;
        }
        EngineCommand::Seek(position_ms) => {
            let seconds = format!("{:.3}", *position_ms as f64 / 1000.0);
            handler.command(&["seek", seconds.as_str(), "absolute"])?;
        }
        EngineCommand::SetVolume(volume) => {
            handler.set_property("volume", volume * 100.0)?;
        }
    }

    Ok(())
}

/// Polls for MPV events and synchronizes the shared snapshot.
///
/// This function waits for up to 50ms for an event from the MPV context.
/// Status changes the application cares about are forwarded as
/// [`AppEvent::Media`].
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    is_paused: &mut bool,
    is_idle: &mut bool,
    snapshot: &Mutex<Snapshot>,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(0.05) else {
        return Ok(());
    };

    let status = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) if duration > 0.0 => {
                Some(MediaStatus::Loaded {
                    duration_ms: (duration * 1000.0) as u64,
                })
            }
            ("pause", Format::Flag(pause)) => {
                *is_paused = pause;
                None
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                if let Ok(mut s) = snapshot.lock() {
                    s.position_ms = (seconds * 1000.0) as u64;
                }
                None
            }
            ("idle-active", Format::Flag(idle_active)) => {
                *is_idle = idle_active;
                None
            }
            _ => None,
        },
        mpv::Event::EndFile(result) => match result {
            Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => Some(MediaStatus::Finished),
            Err(e) => {
                log::error!("Media source could not be played: {:?}", e);
                None
            }
            _ => None,
        },
        _ => None,
    };

    if let Ok(mut s) = snapshot.lock() {
        s.state = player_state(*is_paused, *is_idle);
    }

    if let Some(status) = status {
        event_tx
            .send(AppEvent::Media(status))
            .context("Failed to send media status event")?;
    }

    Ok(())
}
