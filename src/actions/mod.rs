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

//! Application actions and their dispatch.
//!
//! Every user control resolves to an [`Action`], whether it was triggered by
//! a key binding, a mouse click, a `:` command or a component such as the
//! editor. [`dispatch`] is the single place where actions change the
//! application state.
//!
//! # Organization
//!
//! * [`keymap`]: Maps raw key and mouse input to actions.
//!
//! An action that fails is logged and reported to the user in an error
//! dialog, it never ends the application.

pub(crate) mod keymap;

use anyhow::Result;

use crate::{
    App,
    browser::Direction,
    components::dialog::{Dialog, Notice},
    editor::{Editor, EditorMode},
    events::AppEvent,
    player::PlaybackEngine,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,

    Previous,
    Next,

    TogglePlay,
    SeekBy(i64),
    SeekTo(u64),
    VolumeBy(i16),
    SetVolume(u8),
    Mute,
    ResetVolume,

    Add,
    Edit,
    Delete,
    ConfirmDelete(i64),
    SubmitEntry,
    CancelEntry,

    FocusFilter,
    BlurFilter,
    ToggleFilterPanel,
    Find,
    ClearFilter,

    AddGenre(String),
    Reload,
}

/// Applies an action to the application.
///
/// # Errors
///
/// Only fails if the application event channel is closed. Failures of the
/// action itself are shown to the user instead.
pub(crate) fn dispatch<P: PlaybackEngine>(app: &mut App<P>, action: Action) -> Result<()> {
    if action == Action::Quit {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let was_filtered = app.browser.is_filtered();

    if let Err(e) = perform(app, action.clone()) {
        log::error!("Action {:?} failed: {:#}", action, e);
        show_notice(app, Notice::Error(format!("{:#}", e)));
    }

    // A reload drops any filter, the panel must not keep showing it.
    if was_filtered && !app.browser.is_filtered() {
        app.filter_panel.reset();
    }

    Ok(())
}

pub(crate) fn show_notice<P: PlaybackEngine>(app: &mut App<P>, notice: Notice) {
    app.dialog = Some(Dialog::Notice(notice));
}

fn perform<P: PlaybackEngine>(app: &mut App<P>, action: Action) -> Result<()> {
    match action {
        Action::Quit => {}

        Action::Previous => {
            app.browser.navigate(Direction::Previous);
        }
        Action::Next => {
            app.browser.navigate(Direction::Next);
        }

        Action::TogglePlay => app.browser.toggle_play()?,
        Action::SeekBy(delta) => app.browser.seek_by(delta)?,
        Action::SeekTo(seconds) => app.browser.seek_to(seconds)?,
        Action::VolumeBy(delta) => app.browser.change_volume(delta)?,
        Action::SetVolume(volume) => app.browser.set_volume(volume)?,
        Action::Mute => app.browser.mute()?,
        Action::ResetVolume => app.browser.reset_volume()?,

        Action::Add => {
            let genres = app.browser.genres().to_vec();
            app.editor = Some(Editor::create(genres, app.browser.paths().clone()));
        }
        Action::Edit => {
            if let Some(track) = app.browser.current_track() {
                let genres = app.browser.genres().to_vec();
                app.editor = Some(Editor::edit(track, genres, app.browser.paths().clone()));
            }
        }
        Action::Delete => {
            if let Some(track) = app.browser.current_track() {
                let message = format!("Delete \"{}\" by {}?", track.title, track.author);
                app.dialog = Some(Dialog::confirm(message, Action::ConfirmDelete(track.id)));
            }
        }
        Action::ConfirmDelete(track_id) => app.browser.delete(track_id)?,

        Action::SubmitEntry => submit_entry(app)?,
        Action::CancelEntry => app.editor = None,

        Action::FocusFilter => app.filter_panel.focus_first(),
        Action::BlurFilter => app.filter_panel.blur(),
        Action::ToggleFilterPanel => app.filter_panel.toggle_visible(),
        Action::Find => {
            let notice = app.browser.filter(&app.filter_panel.criteria());
            app.filter_panel.blur();
            show_notice(app, notice);
        }
        Action::ClearFilter => {
            app.browser.clear_filter();
            app.filter_panel.reset();
        }

        Action::AddGenre(name) => {
            let notice = app.browser.add_genre(&name)?;
            app.filter_panel.set_genres(app.browser.genres().to_vec());
            show_notice(app, notice);
        }
        Action::Reload => {
            app.browser.refresh()?;
            app.filter_panel.set_genres(app.browser.genres().to_vec());
        }
    }

    Ok(())
}

// Validates the open editor and writes the entry. The editor stays open with
// its input unless the write succeeded.
fn submit_entry<P: PlaybackEngine>(app: &mut App<P>) -> Result<()> {
    let Some(editor) = &app.editor else {
        return Ok(());
    };

    let fields = match editor.validate() {
        Ok(fields) => fields,
        Err(e) => {
            log::info!("Rejected track entry: {}", e);
            show_notice(app, Notice::Warning(e.to_string()));
            return Ok(());
        }
    };

    match editor.mode() {
        EditorMode::Create => app.browser.create(fields)?,
        EditorMode::Edit(track_id) => {
            let notice = app.browser.update(track_id, fields)?;
            show_notice(app, notice);
        }
    }

    app.editor = None;
    Ok(())
}
