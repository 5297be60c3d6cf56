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

//! Library browser state management.
//!
//! The [`Browser`] owns the track list and the cursor into it. It keeps two
//! lists: the *full set*, exactly as last read from the database, and the
//! *active set*, which is either the full set or the result of a filter.
//! Filters are always evaluated against the full set, and every write to the
//! database is followed by a complete reload.
//!
//! The browser also owns the database connection and the playback engine.
//! Whenever the cursor lands on a track its audio is loaded into the engine,
//! replacing whatever was loaded before.

mod playback;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::{
    components::dialog::Notice,
    config::LibraryPaths,
    db,
    model::{Track, TrackFields, filter::TrackFilter},
    player::{PlaybackEngine, PlayerState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Previous,
    Next,
}

/// What to show in place of cover art for the current track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Artwork {
    Image(PathBuf),
    Placeholder,
}

/// Which user controls are currently usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Controls {
    pub(crate) previous: bool,
    pub(crate) next: bool,
    pub(crate) play: bool,
    pub(crate) edit: bool,
    pub(crate) delete: bool,
    pub(crate) clear_filter: bool,
}

pub(crate) struct Browser<P: PlaybackEngine> {
    conn: Connection,
    player: P,
    paths: LibraryPaths,

    full: Vec<Track>,
    active: Vec<Track>,
    current: Option<usize>,
    genres: Vec<String>,
    controls: Controls,

    position: u64,
    duration: u64,
    volume: u8,
    default_volume: u8,
}

impl<P: PlaybackEngine> Browser<P> {
    /// Creates a browser over an open library database.
    ///
    /// The track list is loaded immediately and the first track, if there is
    /// one, is shown and loaded into the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be read or the engine refuses
    /// the initial volume.
    pub(crate) fn new(
        conn: Connection,
        player: P,
        paths: LibraryPaths,
        default_volume: u8,
    ) -> Result<Self> {
        let default_volume = default_volume.min(100);

        let mut browser = Self {
            conn,
            player,
            paths,
            full: Vec::new(),
            active: Vec::new(),
            current: None,
            genres: Vec::new(),
            controls: Controls::default(),
            position: 0,
            duration: 0,
            volume: default_volume,
            default_volume,
        };

        browser.set_volume(default_volume)?;
        browser.refresh()?;

        Ok(browser)
    }

    pub(crate) fn active(&self) -> &[Track] {
        &self.active
    }

    pub(crate) fn full_len(&self) -> usize {
        self.full.len()
    }

    pub(crate) fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub(crate) fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|index| self.active.get(index))
    }

    pub(crate) fn controls(&self) -> Controls {
        self.controls
    }

    pub(crate) fn genres(&self) -> &[String] {
        &self.genres
    }

    pub(crate) fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    pub(crate) fn is_filtered(&self) -> bool {
        self.controls.clear_filter
    }

    pub(crate) fn artwork(&self) -> Option<Artwork> {
        let track = self.current_track()?;

        Some(match &track.image_path {
            Some(image) => Artwork::Image(self.paths.resolve(image)),
            None => Artwork::Placeholder,
        })
    }

    /// Re-reads all tracks and genres from the database.
    ///
    /// The active set becomes the full set again. The cursor is clamped to the
    /// new list, the display itself is only touched when the list is empty,
    /// in which case it is cleared.
    pub(crate) fn reload(&mut self) -> Result<()> {
        self.full = db::fetch_tracks(&self.conn).context("Failed to load tracks")?;
        self.genres = db::fetch_genres(&self.conn)
            .context("Failed to load genres")?
            .into_iter()
            .map(|genre| genre.name)
            .collect();

        self.active = self.full.clone();
        self.controls.clear_filter = false;

        log::info!(
            "Loaded {} tracks and {} genres",
            self.full.len(),
            self.genres.len()
        );

        match self.active.len() {
            0 => self.clear_display(),
            len => self.current = Some(self.current.unwrap_or(0).min(len - 1)),
        }

        Ok(())
    }

    /// Reloads the library and shows the track under the cursor.
    pub(crate) fn refresh(&mut self) -> Result<()> {
        self.reload()?;
        if self.current.is_some() {
            self.show_current();
        }

        Ok(())
    }

    /// Moves the cursor one step, returning `false` if it was already at that
    /// end of the list.
    pub(crate) fn navigate(&mut self, direction: Direction) -> bool {
        let Some(index) = self.current else {
            return false;
        };

        let target = match direction {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => (index + 1 < self.active.len()).then_some(index + 1),
        };

        let Some(target) = target else {
            return false;
        };

        self.current = Some(target);
        self.show_current();

        true
    }

    /// Filters the full set.
    ///
    /// A filter matching nothing has no lasting effect: the active set goes
    /// back to the full set. Either way the cursor returns to the first track.
    pub(crate) fn filter(&mut self, criteria: &TrackFilter) -> Notice {
        let matches = criteria.apply(&self.full);

        let notice = if matches.is_empty() {
            log::info!("Filter {:?} matched nothing", criteria);
            self.active = self.full.clone();
            self.controls.clear_filter = false;
            Notice::Warning("No tracks match the filter".to_string())
        } else {
            log::info!("Filter {:?} matched {} tracks", criteria, matches.len());
            let notice = Notice::Info(format!("Found {}", track_count(matches.len())));
            self.active = matches;
            self.controls.clear_filter = true;
            notice
        };

        self.current = (!self.active.is_empty()).then_some(0);
        self.show_current();

        notice
    }

    /// Drops any filter, keeping the displayed track where possible.
    pub(crate) fn clear_filter(&mut self) {
        let shown = self.current_track().map(|track| track.id);

        self.active = self.full.clone();
        self.controls.clear_filter = false;

        match shown.and_then(|id| self.active.iter().position(|track| track.id == id)) {
            Some(index) => {
                self.current = Some(index);
                self.update_navigation();
            }
            None => {
                self.current = (!self.active.is_empty()).then_some(0);
                self.show_current();
            }
        }
    }

    /// Inserts a track and moves the cursor onto it.
    pub(crate) fn create(&mut self, fields: TrackFields) -> Result<()> {
        let id = db::insert_track(&self.conn, &fields).context("Could not add the track")?;
        log::info!("Added track {} \"{}\"", id, fields.title);

        self.reload()?;
        self.current = self.active.len().checked_sub(1);
        self.show_current();

        Ok(())
    }

    /// Rewrites a track and moves the cursor onto it.
    pub(crate) fn update(&mut self, track_id: i64, fields: TrackFields) -> Result<Notice> {
        db::update_track(&self.conn, track_id, &fields).context("Could not save the changes")?;
        log::info!("Updated track {} \"{}\"", track_id, fields.title);

        self.reload()?;
        if let Some(index) = self.active.iter().position(|track| track.id == track_id) {
            self.current = Some(index);
        }
        if self.current.is_some() {
            self.show_current();
        }

        Ok(Notice::Info("Changes saved".to_string()))
    }

    /// Deletes a track. The caller is responsible for asking the user first.
    pub(crate) fn delete(&mut self, track_id: i64) -> Result<()> {
        let deleted = db::delete_track(&self.conn, track_id).context("Could not delete the track")?;
        if deleted {
            log::info!("Deleted track {}", track_id);
        } else {
            log::warn!("Track {} was already gone", track_id);
        }

        self.reload()?;
        if self.current.is_some() {
            self.show_current();
        }

        Ok(())
    }

    /// Adds a genre to the library.
    pub(crate) fn add_genre(&mut self, name: &str) -> Result<Notice> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("A genre needs a name");
        }

        let id = db::insert_genre(&self.conn, name)?;
        log::info!("Added genre {} \"{}\"", id, name);

        self.genres = db::fetch_genres(&self.conn)?
            .into_iter()
            .map(|genre| genre.name)
            .collect();

        Ok(Notice::Info(format!("Added genre \"{}\"", name)))
    }

    // Shows the track under the cursor and loads its audio.
    fn show_current(&mut self) {
        let Some(audio) = self
            .current_track()
            .map(|track| self.paths.resolve(&track.audio_path))
        else {
            self.clear_display();
            return;
        };

        self.load_audio(&audio);

        self.controls.play = true;
        self.controls.edit = true;
        self.controls.delete = true;
        self.update_navigation();
    }

    fn update_navigation(&mut self) {
        let len = self.active.len();
        let (previous, next) = match self.current {
            Some(index) => (index > 0, index + 1 < len),
            None => (false, false),
        };

        self.controls.previous = previous;
        self.controls.next = next;
    }

    // Replaces the engine source. A source that fails to load is logged and
    // left unplayed.
    fn load_audio(&mut self, path: &Path) {
        if self.player.state() == PlayerState::Playing {
            if let Err(e) = self.player.stop() {
                log::warn!("Failed to stop playback: {:#}", e);
            }
        }

        self.position = 0;
        self.duration = 0;

        if let Err(e) = self.player.load(path) {
            log::error!("Could not load {}: {:#}", path.display(), e);
        }
    }

    fn clear_display(&mut self) {
        self.current = None;
        self.position = 0;
        self.duration = 0;

        if let Err(e) = self.player.stop().and_then(|()| self.player.unload()) {
            log::warn!("Failed to release the media source: {:#}", e);
        }

        self.controls = Controls {
            clear_filter: self.controls.clear_filter,
            ..Controls::default()
        };
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &P {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut P {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn track_count(count: usize) -> String {
    match count {
        1 => "1 track".to_string(),
        n => format!("{} tracks", n),
    }
}
