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

use super::*;
use std::path::Path;

#[test]
fn default_config_points_at_the_library_layout() {
    let config = AppConfig::default();

    assert_eq!(config.database_path(), Path::new("./database/audio_player.db"));
    assert_eq!(config.default_volume, 50);

    let paths = config.library_paths();
    assert_eq!(paths.audio_dir(), Path::new("./musics"));
    assert_eq!(paths.image_dir(), Path::new("./images"));
}

#[test]
fn stored_paths_are_relative_to_the_library_root() {
    let paths = LibraryPaths::new(Path::new("/srv/library"), "musics/", "/images");

    assert_eq!(paths.stored_audio_path("song.wav"), "musics/song.wav");
    assert_eq!(paths.stored_image_path("cover.png"), "images/cover.png");
    assert_eq!(
        paths.resolve("musics/song.wav"),
        Path::new("/srv/library/musics/song.wav")
    );
    assert_eq!(
        paths.resolve("/images/cover.png"),
        Path::new("/srv/library/images/cover.png")
    );
}

#[test]
fn file_name_of_strips_the_directory() {
    assert_eq!(file_name_of("musics/song.wav"), "song.wav");
    assert_eq!(file_name_of("/images/cover.png"), "cover.png");
    assert_eq!(file_name_of("plain.ogg"), "plain.ogg");
}
