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

//! A cycling selector over the library genres.
//!
//! Besides the genre names the selector always offers one extra entry, shown
//! first, that stands for "no particular genre".

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone)]
pub(crate) struct GenreSelect {
    names: Vec<String>,
    selected: Option<usize>,
    none_label: &'static str,
}

impl GenreSelect {
    pub(crate) fn new(names: Vec<String>, none_label: &'static str) -> Self {
        Self {
            names,
            selected: None,
            none_label,
        }
    }

    /// Replaces the genre names, keeping the current selection if it is still
    /// one of them.
    pub(crate) fn set_names(&mut self, names: Vec<String>) {
        let selected = self.selected_name().map(str::to_string);
        self.names = names;
        self.select_name(selected.as_deref());
    }

    /// Selects a genre by name, ignoring case. Unknown names select nothing.
    pub(crate) fn select_name(&mut self, name: Option<&str>) {
        self.selected = name.map(str::to_lowercase).and_then(|name| {
            self.names
                .iter()
                .position(|candidate| candidate.to_lowercase() == name)
        });
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = (!self.names.is_empty()).then_some(0);
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }

    pub(crate) fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
    }

    pub(crate) fn label(&self) -> &str {
        self.selected_name().unwrap_or(self.none_label)
    }

    pub(crate) fn next(&mut self) {
        self.selected = match self.selected {
            None if !self.names.is_empty() => Some(0),
            Some(index) if index + 1 < self.names.len() => Some(index + 1),
            _ => None,
        };
    }

    pub(crate) fn previous(&mut self) {
        self.selected = match self.selected {
            None => self.names.len().checked_sub(1),
            Some(0) => None,
            Some(index) => Some(index - 1),
        };
    }

    /// Left and right cycle through the entries. Returns `true` if the key
    /// was used.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Right => self.next(),
            KeyCode::Left => self.previous(),
            _ => return false,
        }

        true
    }
}
