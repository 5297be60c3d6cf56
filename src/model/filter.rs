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

//! Track filtering.
//!
//! A [`TrackFilter`] is a conjunction of criteria over the in-memory track
//! list. Every criterion has an "unset" value that matches everything: an
//! empty string for the text criteria, [`GenreCriterion::Any`] for the genre
//! and zero for either duration bound.

use crate::model::Track;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum GenreCriterion {
    #[default]
    Any,
    Named(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrackFilter {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) genre: GenreCriterion,
    pub(crate) min_duration: u32,
    pub(crate) max_duration: u32,
}

impl TrackFilter {
    /// Returns `true` if the track satisfies every criterion.
    pub(crate) fn matches(&self, track: &Track) -> bool {
        contains_ignore_case(&track.title, &self.title)
            && contains_ignore_case(&track.author, &self.author)
            && self.matches_genre(track)
            && (self.min_duration == 0 || track.duration >= self.min_duration)
            && (self.max_duration == 0 || track.duration <= self.max_duration)
    }

    /// Returns the tracks satisfying the filter, in their original order.
    pub(crate) fn apply(&self, tracks: &[Track]) -> Vec<Track> {
        tracks
            .iter()
            .filter(|track| self.matches(track))
            .cloned()
            .collect()
    }

    fn matches_genre(&self, track: &Track) -> bool {
        match &self.genre {
            GenreCriterion::Any => true,
            GenreCriterion::Named(name) => track
                .genre
                .as_deref()
                .is_some_and(|genre| genre.to_lowercase() == name.to_lowercase()),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
