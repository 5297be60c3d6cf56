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

//! Track entry validation.
//!
//! Rules are checked in a fixed order (title, author, duration, audio file,
//! image file) and the first failing rule is the one reported.

use std::{ffi::OsStr, path::Path};

use thiserror::Error;

use crate::{
    config::LibraryPaths,
    model::{DURATION_RANGE, TrackFields},
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("The track title is missing")]
    Title,

    #[error("The author name is missing")]
    Author,

    #[error("Invalid duration, valid values are from 1 to 1200 seconds")]
    Duration,

    #[error("The audio file does not exist or was not found")]
    AudioPath,

    #[error("The image file does not exist or was not found")]
    ImagePath,
}

/// The editor form contents, exactly as typed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RawEntry<'a> {
    pub(crate) title: &'a str,
    pub(crate) author: &'a str,
    pub(crate) genre: Option<&'a str>,
    pub(crate) duration: &'a str,
    pub(crate) audio_file: &'a str,
    pub(crate) image_file: &'a str,
}

/// Checks a form and converts it to a storable payload.
///
/// File names are looked up inside the library audio and image directories
/// and stored relative to the library root.
pub(crate) fn validate(
    raw: &RawEntry<'_>,
    paths: &LibraryPaths,
) -> Result<TrackFields, ValidationError> {
    let title = raw.title.trim();
    if title.is_empty() {
        return Err(ValidationError::Title);
    }

    let author = raw.author.trim();
    if author.is_empty() {
        return Err(ValidationError::Author);
    }

    let duration = parse_duration(raw.duration).ok_or(ValidationError::Duration)?;

    let audio_file = raw.audio_file.trim();
    if !is_plain_file_name(audio_file) || !paths.audio_dir().join(audio_file).is_file() {
        return Err(ValidationError::AudioPath);
    }

    let image_file = raw.image_file.trim();
    if !image_file.is_empty()
        && (!is_plain_file_name(image_file) || !paths.image_dir().join(image_file).is_file())
    {
        return Err(ValidationError::ImagePath);
    }

    Ok(TrackFields {
        title: title.to_string(),
        author: author.to_string(),
        genre: raw.genre.map(str::to_string),
        duration,
        image_path: (!image_file.is_empty()).then(|| paths.stored_image_path(image_file)),
        audio_path: paths.stored_audio_path(audio_file),
    })
}

// A bare file name directly inside its directory, never a nested or escaping
// path.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && Path::new(name).file_name() == Some(OsStr::new(name))
}

fn parse_duration(text: &str) -> Option<u32> {
    let duration: u32 = text.trim().parse().ok()?;
    DURATION_RANGE.contains(&duration).then_some(duration)
}
