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

//! An `mm:ss` duration picker.

use crossterm::event::{KeyCode, KeyEvent};

use crate::util::format::format_time;

const MAX_SECONDS: u32 = 59 * 60 + 59;

/// A duration between `00:00` and `59:59`, where `00:00` means "unset".
///
/// Up and down step whole minutes, left and right step seconds, backspace
/// clears the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TimePicker {
    seconds: u32,
}

impl TimePicker {
    pub(crate) fn seconds(&self) -> u32 {
        self.seconds
    }

    pub(crate) fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds.min(MAX_SECONDS);
    }

    pub(crate) fn reset(&mut self) {
        self.seconds = 0;
    }

    pub(crate) fn label(&self) -> String {
        format_time(u64::from(self.seconds))
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.set_seconds(self.seconds.saturating_add(60)),
            KeyCode::Down => self.set_seconds(self.seconds.saturating_sub(60)),
            KeyCode::Right => self.set_seconds(self.seconds.saturating_add(1)),
            KeyCode::Left => self.set_seconds(self.seconds.saturating_sub(1)),
            KeyCode::Backspace | KeyCode::Delete => self.reset(),
            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(picker: &mut TimePicker, code: KeyCode) -> bool {
        picker.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrows_step_minutes_and_seconds() {
        let mut picker = TimePicker::default();
        assert_eq!(picker.label(), "00:00");

        press(&mut picker, KeyCode::Up);
        press(&mut picker, KeyCode::Up);
        press(&mut picker, KeyCode::Right);
        assert_eq!(picker.seconds(), 121);
        assert_eq!(picker.label(), "02:01");

        press(&mut picker, KeyCode::Down);
        press(&mut picker, KeyCode::Down);
        press(&mut picker, KeyCode::Down);
        assert_eq!(picker.seconds(), 0);

        press(&mut picker, KeyCode::Left);
        assert_eq!(picker.seconds(), 0);
    }

    #[test]
    fn value_stops_at_the_top_of_the_hour() {
        let mut picker = TimePicker::default();
        picker.set_seconds(MAX_SECONDS - 30);

        press(&mut picker, KeyCode::Up);
        assert_eq!(picker.label(), "59:59");

        assert!(press(&mut picker, KeyCode::Backspace));
        assert_eq!(picker.seconds(), 0);

        assert!(!press(&mut picker, KeyCode::Char('x')));
    }
}
