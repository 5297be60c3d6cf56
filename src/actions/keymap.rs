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

//! Global key and mouse bindings.
//!
//! These apply only when no dialog, editor, command line or filter panel has
//! claimed the input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::actions::Action;

const FINE_SEEK_DELTA: i64 = 5;
const SEEK_DELTA: i64 = 20;

const FINE_VOLUME_DELTA: i16 = 1;
const VOLUME_DELTA: i16 = 5;

/// Maps a key press to an action.
pub(crate) fn key_action(key: KeyEvent) -> Option<Action> {
    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ToggleFilterPanel,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Reload,

        (KeyCode::Char('q'), _) => Action::Quit,

        // Navigation
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) | (KeyCode::Up, _) => Action::Previous,
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) | (KeyCode::Down, _) => Action::Next,

        // Playback
        (KeyCode::Char(' '), _) => Action::TogglePlay,
        (KeyCode::Char(','), _) => Action::SeekBy(-FINE_SEEK_DELTA),
        (KeyCode::Char('.'), _) => Action::SeekBy(FINE_SEEK_DELTA),
        (KeyCode::Char('<'), _) => Action::SeekBy(-SEEK_DELTA),
        (KeyCode::Char('>'), _) => Action::SeekBy(SEEK_DELTA),
        (KeyCode::Char('-'), _) => Action::VolumeBy(-FINE_VOLUME_DELTA),
        (KeyCode::Char('='), _) => Action::VolumeBy(FINE_VOLUME_DELTA),
        (KeyCode::Char('_'), _) => Action::VolumeBy(-VOLUME_DELTA),
        (KeyCode::Char('+'), _) => Action::VolumeBy(VOLUME_DELTA),
        (KeyCode::Char('m'), _) => Action::Mute,
        (KeyCode::Char('0'), _) => Action::ResetVolume,

        // Library
        (KeyCode::Char('a'), _) => Action::Add,
        (KeyCode::Char('e'), _) => Action::Edit,
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => Action::Delete,

        // Filtering
        (KeyCode::Char('/'), _) => Action::FocusFilter,
        (KeyCode::Char('f'), _) => Action::Find,
        (KeyCode::Char('c'), _) => Action::ClearFilter,

        _ => return None,
    };

    Some(action)
}

/// Right click mutes, left click restores the default volume.
pub(crate) fn mouse_action(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => Some(Action::Mute),
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ResetVolume),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        key_action(KeyEvent::new(code, modifiers))
    }

    fn click(kind: MouseEventKind) -> Option<Action> {
        mouse_action(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn control_chords_are_checked_before_plain_letters() {
        assert_eq!(
            key(KeyCode::Char('f'), KeyModifiers::CONTROL),
            Some(Action::ToggleFilterPanel)
        );
        assert_eq!(key(KeyCode::Char('f'), KeyModifiers::NONE), Some(Action::Find));
    }

    #[test]
    fn playback_keys() {
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::NONE), Some(Action::TogglePlay));
        assert_eq!(key(KeyCode::Char('<'), KeyModifiers::SHIFT), Some(Action::SeekBy(-20)));
        assert_eq!(key(KeyCode::Char('+'), KeyModifiers::SHIFT), Some(Action::VolumeBy(5)));
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), Some(Action::Next));
        assert_eq!(key(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }

    #[test]
    fn mouse_buttons_control_the_volume() {
        assert_eq!(click(MouseEventKind::Down(MouseButton::Right)), Some(Action::Mute));
        assert_eq!(click(MouseEventKind::Down(MouseButton::Left)), Some(Action::ResetVolume));
        assert_eq!(click(MouseEventKind::Moved), None);
    }
}
