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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, tracks and
//! the genres they belong to, as they are held in memory after being read
//! from the library database.

pub(crate) mod filter;

use std::ops::RangeInclusive;

/// Valid track durations, in whole seconds.
pub(crate) const DURATION_RANGE: RangeInclusive<u32> = 1..=1200;

/// A track as listed by the browser, joined with its genre name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) genre: Option<String>,
    pub(crate) duration: u32,
    pub(crate) image_path: Option<String>,
    pub(crate) audio_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Genre {
    pub(crate) id: i64,
    pub(crate) name: String,
}

/// A validated track payload, ready to be inserted or written over an
/// existing row.
///
/// Paths are already in their stored form, relative to the library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackFields {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) genre: Option<String>,
    pub(crate) duration: u32,
    pub(crate) image_path: Option<String>,
    pub(crate) audio_path: String,
}
