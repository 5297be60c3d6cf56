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

//! Application configuration.
//!
//! This module manages the application configuration file and derives the
//! fixed library locations (database, audio and image directories) from it.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "audioshelf";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub library_root: PathBuf,
    pub database: PathBuf,
    pub audio_dir: String,
    pub image_dir: String,
    pub default_volume: u8,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            library_root: PathBuf::from("."),
            database: PathBuf::from("database/audio_player.db"),
            audio_dir: "musics".to_string(),
            image_dir: "images".to_string(),
            default_volume: 50,
            log_file: PathBuf::from("audioshelf.log"),
        }
    }
}

impl AppConfig {
    /// The database file, resolved against the library root.
    pub fn database_path(&self) -> PathBuf {
        self.library_root.join(&self.database)
    }

    pub fn library_paths(&self) -> LibraryPaths {
        LibraryPaths::new(&self.library_root, &self.audio_dir, &self.image_dir)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Fixed locations of the audio and image files referenced by tracks.
///
/// Tracks store their files as paths relative to the library root, of the
/// form `<audio_dir>/<file>` and `<image_dir>/<file>`. The entry editor only
/// ever deals in bare file names, so this type converts between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    root: PathBuf,
    audio_dir: String,
    image_dir: String,
}

impl LibraryPaths {
    pub fn new(root: &Path, audio_dir: &str, image_dir: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            audio_dir: audio_dir.trim_matches('/').to_string(),
            image_dir: image_dir.trim_matches('/').to_string(),
        }
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.root.join(&self.audio_dir)
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root.join(&self.image_dir)
    }

    pub fn stored_audio_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.audio_dir, file_name)
    }

    pub fn stored_image_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.image_dir, file_name)
    }

    /// Resolves a stored relative path to a location on disk.
    pub fn resolve(&self, stored: &str) -> PathBuf {
        self.root.join(stored.trim_start_matches('/'))
    }
}

/// Returns the file name component of a stored relative path.
pub fn file_name_of(stored: &str) -> &str {
    stored.rsplit('/').next().unwrap_or(stored)
}
