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

use std::{fs, path::Path};

use tempfile::TempDir;

use super::*;

fn genres() -> Vec<String> {
    vec!["Jazz".to_string(), "Rock".to_string()]
}

fn library() -> (TempDir, LibraryPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = LibraryPaths::new(dir.path(), "musics", "images");

    fs::create_dir_all(paths.audio_dir()).unwrap();
    fs::create_dir_all(paths.image_dir()).unwrap();
    fs::write(paths.audio_dir().join("song.mp3"), b"").unwrap();
    fs::write(paths.image_dir().join("cover.png"), b"").unwrap();

    (dir, paths)
}

fn track() -> Track {
    Track {
        id: 9,
        title: "Song".to_string(),
        author: "Someone".to_string(),
        genre: Some("Rock".to_string()),
        duration: 180,
        image_path: Some("images/cover.png".to_string()),
        audio_path: "musics/song.mp3".to_string(),
    }
}

fn press(editor: &mut Editor, code: KeyCode) -> Option<Action> {
    editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        press(editor, KeyCode::Char(c));
    }
}

#[test]
fn a_new_entry_starts_blank_with_the_first_genre() {
    let editor = Editor::create(genres(), LibraryPaths::new(Path::new("/"), "musics", "images"));

    assert_eq!(editor.mode(), EditorMode::Create);
    assert_eq!(editor.window_title(), "Add track");
    assert_eq!(editor.focus(), EditorField::Title);
    assert_eq!(editor.genre.selected_name(), Some("Jazz"));
    assert_eq!(editor.raw().title, "");
    assert_eq!(editor.raw().duration, "");
}

#[test]
fn without_genres_a_new_entry_has_none() {
    let editor = Editor::create(Vec::new(), LibraryPaths::new(Path::new("/"), "musics", "images"));

    assert_eq!(editor.genre.label(), NO_GENRE);
}

#[test]
fn editing_prefills_from_the_track() {
    let editor = Editor::edit(&track(), genres(), LibraryPaths::new(Path::new("/"), "musics", "images"));

    assert_eq!(editor.mode(), EditorMode::Edit(9));
    assert_eq!(editor.window_title(), "Edit track");

    let raw = editor.raw();
    assert_eq!(raw.title, "Song");
    assert_eq!(raw.author, "Someone");
    assert_eq!(raw.genre, Some("Rock"));
    assert_eq!(raw.duration, "180");
    assert_eq!(raw.audio_file, "song.mp3");
    assert_eq!(raw.image_file, "cover.png");
}

#[test]
fn an_edited_track_without_extras_keeps_them_empty() {
    let bare = Track {
        genre: None,
        image_path: None,
        ..track()
    };

    let editor = Editor::edit(&bare, genres(), LibraryPaths::new(Path::new("/"), "musics", "images"));

    assert_eq!(editor.raw().genre, None);
    assert_eq!(editor.raw().image_file, "");
}

#[test]
fn typing_fills_the_focused_field() {
    let (_dir, paths) = library();
    let mut editor = Editor::create(genres(), paths);

    type_text(&mut editor, "Song");
    press(&mut editor, KeyCode::Tab);
    type_text(&mut editor, "Someone");
    press(&mut editor, KeyCode::Tab);
    press(&mut editor, KeyCode::Right);
    press(&mut editor, KeyCode::Tab);
    type_text(&mut editor, "200");
    press(&mut editor, KeyCode::Tab);
    type_text(&mut editor, "song.mp3");

    assert_eq!(press(&mut editor, KeyCode::Enter), Some(Action::SubmitEntry));

    let fields = editor.validate().unwrap();
    assert_eq!(fields.title, "Song");
    assert_eq!(fields.author, "Someone");
    assert_eq!(fields.genre.as_deref(), Some("Rock"));
    assert_eq!(fields.duration, 200);
    assert_eq!(fields.audio_path, "musics/song.mp3");
    assert_eq!(fields.image_path, None);
}

#[test]
fn an_unchanged_edit_validates_to_the_stored_paths() {
    let (_dir, paths) = library();
    let stored = track();

    let fields = Editor::edit(&stored, genres(), paths).validate().unwrap();

    assert_eq!(fields.audio_path, stored.audio_path);
    assert_eq!(fields.image_path, stored.image_path);
}

#[test]
fn a_nested_audio_file_is_not_accepted() {
    let (_dir, paths) = library();
    fs::create_dir_all(paths.audio_dir().join("sub")).unwrap();
    fs::write(paths.audio_dir().join("sub/song.mp3"), b"").unwrap();

    let mut editor = Editor::edit(&track(), genres(), paths);
    editor.audio = Input::new("sub/song.mp3".to_string());

    assert_eq!(editor.validate(), Err(ValidationError::AudioPath));
}

#[test]
fn failed_validation_keeps_the_input() {
    let (_dir, paths) = library();
    let mut editor = Editor::create(genres(), paths);
    type_text(&mut editor, "Song");

    assert_eq!(editor.validate(), Err(ValidationError::Author));
    assert_eq!(editor.raw().title, "Song");
}

#[test]
fn escape_cancels_and_back_tab_wraps() {
    let mut editor = Editor::create(genres(), LibraryPaths::new(Path::new("/"), "musics", "images"));

    press(&mut editor, KeyCode::BackTab);
    assert_eq!(editor.focus(), EditorField::Image);

    assert_eq!(press(&mut editor, KeyCode::Esc), Some(Action::CancelEntry));
}

#[test]
fn the_picker_only_opens_on_path_fields() {
    let (_dir, paths) = library();
    let mut editor = Editor::create(genres(), paths);

    press(&mut editor, KeyCode::F(2));
    assert!(editor.picker().is_none());

    for _ in 0..4 {
        press(&mut editor, KeyCode::Tab);
    }
    assert_eq!(editor.focus(), EditorField::Audio);

    editor.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
    let picker = editor.picker().unwrap();
    assert_eq!(picker.kind(), FileKind::Audio);
    assert_eq!(picker.files(), ["song.mp3"]);
}

#[test]
fn a_picked_file_fills_the_field() {
    let (_dir, paths) = library();
    let mut editor = Editor::edit(&track(), genres(), paths);
    editor.image = Input::default();
    for _ in 0..5 {
        press(&mut editor, KeyCode::Tab);
    }

    press(&mut editor, KeyCode::F(2));
    assert_eq!(press(&mut editor, KeyCode::Enter), None);

    assert!(editor.picker().is_none());
    assert_eq!(editor.raw().image_file, "cover.png");
}

#[test]
fn an_unreadable_audio_file_leaves_the_duration_alone() {
    let (_dir, paths) = library();
    let mut editor = Editor::create(genres(), paths);
    for _ in 0..4 {
        press(&mut editor, KeyCode::Tab);
    }

    press(&mut editor, KeyCode::F(2));
    press(&mut editor, KeyCode::Enter);

    assert_eq!(editor.raw().audio_file, "song.mp3");
    assert_eq!(editor.raw().duration, "");
}

#[test]
fn cancelling_the_picker_keeps_the_field() {
    let (_dir, paths) = library();
    let mut editor = Editor::edit(&track(), genres(), paths);
    for _ in 0..4 {
        press(&mut editor, KeyCode::Tab);
    }

    press(&mut editor, KeyCode::F(2));
    assert!(editor.picker().is_some());
    assert_eq!(press(&mut editor, KeyCode::Esc), None);

    assert!(editor.picker().is_none());
    assert_eq!(editor.raw().audio_file, "song.mp3");
}
