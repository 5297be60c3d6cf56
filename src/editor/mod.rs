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

//! Modal track entry form.
//!
//! The [`Editor`] collects the fields of a new or existing track. It never
//! writes to the library itself: submitting raises
//! [`Action::SubmitEntry`] and the dispatcher validates the form, persists the
//! result and closes the editor only if that succeeded. Until then the typed
//! input stays as it is.

pub(crate) mod picker;
#[cfg(test)]
mod tests;
pub(crate) mod validation;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::Action,
    components::GenreSelect,
    config::{LibraryPaths, file_name_of},
    editor::{
        picker::{FileKind, FilePicker, PickerOutcome, probe_duration},
        validation::{RawEntry, ValidationError},
    },
    model::{Track, TrackFields},
};

pub(crate) const NO_GENRE: &str = "No genre";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorField {
    Title,
    Author,
    Genre,
    Duration,
    Audio,
    Image,
}

impl EditorField {
    pub(crate) const ALL: [EditorField; 6] = [
        EditorField::Title,
        EditorField::Author,
        EditorField::Genre,
        EditorField::Duration,
        EditorField::Audio,
        EditorField::Image,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            EditorField::Title => "Title",
            EditorField::Author => "Author",
            EditorField::Genre => "Genre",
            EditorField::Duration => "Duration (s)",
            EditorField::Audio => "Audio file",
            EditorField::Image => "Image file",
        }
    }

    fn step(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        let index = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ALL[index]
    }
}

pub(crate) struct Editor {
    mode: EditorMode,
    focus: EditorField,

    pub(crate) title: Input,
    pub(crate) author: Input,
    pub(crate) genre: GenreSelect,
    pub(crate) duration: Input,
    pub(crate) audio: Input,
    pub(crate) image: Input,

    picker: Option<FilePicker>,
    paths: LibraryPaths,
}

impl Editor {
    /// An empty form for a new track, with the first genre preselected.
    pub(crate) fn create(genres: Vec<String>, paths: LibraryPaths) -> Self {
        let mut genre = GenreSelect::new(genres, NO_GENRE);
        genre.select_first();

        Self {
            mode: EditorMode::Create,
            focus: EditorField::Title,
            title: Input::default(),
            author: Input::default(),
            genre,
            duration: Input::default(),
            audio: Input::default(),
            image: Input::default(),
            picker: None,
            paths,
        }
    }

    /// A form filled in from an existing track. Paths show only the file
    /// name.
    pub(crate) fn edit(track: &Track, genres: Vec<String>, paths: LibraryPaths) -> Self {
        let mut genre = GenreSelect::new(genres, NO_GENRE);
        genre.select_name(track.genre.as_deref());

        Self {
            mode: EditorMode::Edit(track.id),
            focus: EditorField::Title,
            title: Input::new(track.title.clone()),
            author: Input::new(track.author.clone()),
            genre,
            duration: Input::new(track.duration.to_string()),
            audio: Input::new(file_name_of(&track.audio_path).to_string()),
            image: Input::new(
                track
                    .image_path
                    .as_deref()
                    .map(file_name_of)
                    .unwrap_or_default()
                    .to_string(),
            ),
            picker: None,
            paths,
        }
    }

    pub(crate) fn mode(&self) -> EditorMode {
        self.mode
    }

    pub(crate) fn window_title(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Add track",
            EditorMode::Edit(_) => "Edit track",
        }
    }

    pub(crate) fn focus(&self) -> EditorField {
        self.focus
    }

    pub(crate) fn picker(&self) -> Option<&FilePicker> {
        self.picker.as_ref()
    }

    /// The text input behind a field, `None` for the genre selector.
    pub(crate) fn input(&self, field: EditorField) -> Option<&Input> {
        match field {
            EditorField::Title => Some(&self.title),
            EditorField::Author => Some(&self.author),
            EditorField::Genre => None,
            EditorField::Duration => Some(&self.duration),
            EditorField::Audio => Some(&self.audio),
            EditorField::Image => Some(&self.image),
        }
    }

    fn input_mut(&mut self, field: EditorField) -> Option<&mut Input> {
        match field {
            EditorField::Title => Some(&mut self.title),
            EditorField::Author => Some(&mut self.author),
            EditorField::Genre => None,
            EditorField::Duration => Some(&mut self.duration),
            EditorField::Audio => Some(&mut self.audio),
            EditorField::Image => Some(&mut self.image),
        }
    }

    pub(crate) fn raw(&self) -> RawEntry<'_> {
        RawEntry {
            title: self.title.value(),
            author: self.author.value(),
            genre: self.genre.selected_name(),
            duration: self.duration.value(),
            audio_file: self.audio.value(),
            image_file: self.image.value(),
        }
    }

    pub(crate) fn validate(&self) -> Result<TrackFields, ValidationError> {
        validation::validate(&self.raw(), &self.paths)
    }

    /// Opens the file picker for the focused path field.
    pub(crate) fn open_picker(&mut self) {
        let picker = match self.focus {
            EditorField::Audio => FilePicker::open(FileKind::Audio, &self.paths.audio_dir()),
            EditorField::Image => FilePicker::open(FileKind::Image, &self.paths.image_dir()),
            _ => return,
        };

        log::debug!("Picking from {} files", picker.files().len());
        self.picker = Some(picker);
    }

    fn apply_pick(&mut self, kind: FileKind, file_name: String) {
        match kind {
            FileKind::Audio => {
                if self.duration.value().trim().is_empty() {
                    let path = self.paths.audio_dir().join(&file_name);
                    if let Some(seconds) = probe_duration(&path) {
                        self.duration = Input::new(seconds.to_string());
                    }
                }
                self.audio = Input::new(file_name);
            }
            FileKind::Image => self.image = Input::new(file_name),
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if let Some(picker) = &mut self.picker {
            match picker.handle_key(key) {
                PickerOutcome::Pending => {}
                PickerOutcome::Cancelled => self.picker = None,
                PickerOutcome::Chosen(file_name) => {
                    let kind = picker.kind();
                    self.picker = None;
                    self.apply_pick(kind, file_name);
                }
            }
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => return Some(Action::SubmitEntry),
            (KeyCode::Esc, _) => return Some(Action::CancelEntry),
            (KeyCode::Tab, _) => self.focus = self.focus.step(true),
            (KeyCode::BackTab, _) => self.focus = self.focus.step(false),
            (KeyCode::F(2), _) => self.open_picker(),
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => self.open_picker(),
            _ => match self.input_mut(self.focus) {
                Some(input) => {
                    input.handle_event(&Event::Key(key));
                }
                None => {
                    self.genre.handle_key(key);
                }
            },
        }

        None
    }
}
