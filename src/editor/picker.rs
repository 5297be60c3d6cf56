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

//! Library file selection.
//!
//! The picker lists the files directly inside one of the library directories
//! and hands back the chosen file name. Duration probing for picked audio
//! files lives here too since it is the only place a file is inspected.

use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use lofty::{prelude::*, probe::Probe};
use walkdir::WalkDir;

use crate::model::DURATION_RANGE;

const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "flac", "ogg"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileKind {
    Audio,
    Image,
}

impl FileKind {
    pub(crate) fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::Audio => AUDIO_EXTENSIONS,
            FileKind::Image => IMAGE_EXTENSIONS,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            FileKind::Audio => "Choose audio file",
            FileKind::Image => "Choose image file",
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum PickerOutcome {
    Pending,
    Cancelled,
    Chosen(String),
}

#[derive(Debug)]
pub(crate) struct FilePicker {
    kind: FileKind,
    files: Vec<String>,
    selected: usize,
}

impl FilePicker {
    /// Lists `dir`. A directory that cannot be read gives an empty picker.
    pub(crate) fn open(kind: FileKind, dir: &Path) -> Self {
        let files = list_files(dir, kind.extensions()).unwrap_or_else(|e| {
            log::warn!("Could not list {}: {:#}", dir.display(), e);
            Vec::new()
        });

        Self {
            kind,
            files,
            selected: 0,
        }
    }

    pub(crate) fn kind(&self) -> FileKind {
        self.kind
    }

    pub(crate) fn files(&self) -> &[String] {
        &self.files
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> PickerOutcome {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.files.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(file) = self.files.get(self.selected) {
                    return PickerOutcome::Chosen(file.clone());
                }
            }
            KeyCode::Esc => return PickerOutcome::Cancelled,
            _ => {}
        }

        PickerOutcome::Pending
    }
}

/// Returns the names of the files directly inside `dir` whose extension is
/// one of `extensions`, sorted by name.
pub(crate) fn list_files(dir: &Path, extensions: &[&str]) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let accepted = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext.to_lowercase().as_str()));

        if !accepted {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => files.push(name.to_string()),
            None => log::warn!("Skipping non UTF-8 file name {:?}", entry.file_name()),
        }
    }

    files.sort();
    Ok(files)
}

/// Reads the play time of an audio file in whole seconds.
///
/// Returns `None` if the file cannot be parsed or its duration is not a
/// valid track duration.
pub(crate) fn probe_duration(path: &Path) -> Option<u32> {
    let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("No audio properties for {}: {}", path.display(), e);
            return None;
        }
    };

    let seconds = u32::try_from(tagged_file.properties().duration().as_secs()).ok()?;
    DURATION_RANGE.contains(&seconds).then_some(seconds)
}
