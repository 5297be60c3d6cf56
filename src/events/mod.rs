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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse), playback engine
//! updates and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input thread, the tick thread and the engine worker.
//! 2. **Route**: Key presses go to whichever component currently owns the
//!    keyboard (dialog, editor, command line, filter panel) or else to the
//!    global key map. Each of them produces [`Action`]s.
//! 3. **Dispatch**: Actions update the [`App`] state via
//!    [`dispatch`](crate::actions::dispatch).
//! 4. **Render**: After each event is processed, the UI is re-drawn.

#[cfg(test)]
mod tests;

use std::{
    io::{self, Stdout},
    sync::mpsc::Sender,
};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::{
        Action, dispatch,
        keymap::{key_action, mouse_action},
        show_notice,
    },
    components::dialog::{DialogOutcome, Notice},
    player::{MediaStatus, PlaybackEngine},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Action(Action),
    Notice(Notice),

    Media(MediaStatus),

    Tick,

    ExitApplication,
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if drawing fails or the playback engine reports a fatal
/// error.
pub(crate) fn process_events<P: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<P>,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => anyhow::bail!(message),
            event => handle_event(app, event)?,
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Reads terminal events and posts the key and mouse ones to the event loop.
///
/// Returns once the event loop has gone away. A read error is reported as a
/// fatal error and also ends the forwarding, the terminal is not retried.
pub(crate) fn forward_terminal_events<F>(mut read: F, event_tx: &Sender<AppEvent>)
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match read() {
            Ok(Event::Key(key)) => AppEvent::Key(key),
            Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
            Ok(_) => continue,
            Err(e) => {
                log::error!("Failed to read terminal event: {}", e);
                event_tx
                    .send(AppEvent::FatalError(format!("Terminal input failed: {}", e)))
                    .ok();
                return;
            }
        };

        if event_tx.send(event).is_err() {
            return;
        }
    }
}

pub(crate) fn handle_event<P: PlaybackEngine>(app: &mut App<P>, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
        AppEvent::Action(action) => dispatch(app, action)?,
        AppEvent::Notice(notice) => show_notice(app, notice),
        AppEvent::Media(status) => app.browser.on_media_status(status),
        AppEvent::Tick => app.browser.on_tick(),
        AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    Ok(())
}

/// Routes a key press to the component that currently owns the keyboard.
///
/// An open dialog takes every key, then the editor, then the command line
/// (which only claims `:` while inactive), then the focused filter panel.
/// Anything left goes through the global key map.
fn process_key_event<P: PlaybackEngine>(app: &mut App<P>, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if let Some(dialog) = &app.dialog {
        match dialog.handle_key(key) {
            DialogOutcome::Pending => {}
            DialogOutcome::Dismissed => app.dialog = None,
            DialogOutcome::Confirmed(action) => {
                app.dialog = None;
                dispatch(app, action)?;
            }
        }
        return Ok(());
    }

    if let Some(editor) = &mut app.editor {
        if let Some(action) = editor.handle_key(key) {
            dispatch(app, action)?;
        }
        return Ok(());
    }

    if app.commander.handle_event(&Event::Key(key), &app.event_tx)? {
        return Ok(());
    }

    if app.filter_panel.is_focused() {
        if let Some(action) = app.filter_panel.handle_key(key) {
            dispatch(app, action)?;
        }
        return Ok(());
    }

    if let Some(action) = key_action(key) {
        dispatch(app, action)?;
    }

    Ok(())
}

fn process_mouse_event<P: PlaybackEngine>(app: &mut App<P>, mouse: MouseEvent) -> Result<()> {
    if app.dialog.is_some() || app.editor.is_some() {
        return Ok(());
    }

    if let Some(action) = mouse_action(mouse) {
        dispatch(app, action)?;
    }

    Ok(())
}
