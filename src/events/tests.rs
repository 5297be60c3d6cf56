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


use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use super::*;
use crate::{
    actions::tests::app,
    components::dialog::Dialog,
    player::{PlayerState, fake::FakeEngine},
};

fn press(app: &mut App<FakeEngine>, code: KeyCode) {
    handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
}

fn type_text(app: &mut App<FakeEngine>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn click(app: &mut App<FakeEngine>, button: MouseButton) {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(button),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    handle_event(app, AppEvent::Mouse(mouse)).unwrap();
}

// Feeds everything posted to the event channel back through the handler.
fn pump(app: &mut App<FakeEngine>) {
    let pending: Vec<AppEvent> = app.event_rx.try_iter().collect();
    for event in pending {
        handle_event(app, event).unwrap();
    }
}

#[test]
fn global_keys_drive_the_browser() {
    let mut app = app();

    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.browser.current_index(), Some(2));

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.browser.current_index(), Some(1));
}

#[test]
fn key_releases_are_ignored() {
    let mut app = app();

    let release = KeyEvent::new_with_kind(
        KeyCode::Char('l'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    handle_event(&mut app, AppEvent::Key(release)).unwrap();

    assert_eq!(app.browser.current_index(), Some(0));
}

#[test]
fn an_open_dialog_takes_every_key() {
    let mut app = app();
    handle_event(
        &mut app,
        AppEvent::Notice(Notice::Info("Hello".to_string())),
    )
    .unwrap();

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.browser.current_index(), Some(0));
    assert!(app.dialog.is_some());

    press(&mut app, KeyCode::Enter);
    assert!(app.dialog.is_none());
}

#[test]
fn deleting_needs_a_yes() {
    let mut app = app();

    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(app.dialog, Some(Dialog::Confirm { .. })));

    press(&mut app, KeyCode::Char('n'));
    assert!(app.dialog.is_none());
    assert_eq!(app.browser.active().len(), 3);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert!(app.dialog.is_none());
    assert_eq!(app.browser.active().len(), 2);
    assert_eq!(app.browser.current_track().map(|t| t.title.as_str()), Some("Beta"));
}

#[test]
fn the_editor_takes_typed_keys() {
    let mut app = app();

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "ql");

    assert!(app.event_rx.try_recv().is_err());
    assert_eq!(app.browser.current_index(), Some(0));
    assert_eq!(app.editor.as_ref().map(|e| e.title.value()), Some("ql"));

    press(&mut app, KeyCode::Esc);
    assert!(app.editor.is_none());
}

#[test]
fn commands_are_posted_and_then_dispatched() {
    let mut app = app();

    type_text(&mut app, ":next");
    assert!(app.commander.active());
    assert_eq!(app.browser.current_index(), Some(0));

    press(&mut app, KeyCode::Enter);
    assert!(!app.commander.active());

    pump(&mut app);
    assert_eq!(app.browser.current_index(), Some(1));
}

#[test]
fn unknown_commands_are_shown_as_warnings() {
    let mut app = app();

    type_text(&mut app, ":dance");
    press(&mut app, KeyCode::Enter);
    pump(&mut app);

    assert_eq!(
        app.dialog,
        Some(Dialog::Notice(Notice::Warning(
            "Unknown command: dance".to_string()
        )))
    );
}

#[test]
fn the_focused_filter_panel_takes_typed_keys() {
    let mut app = app();

    press(&mut app, KeyCode::Char('/'));
    assert!(app.filter_panel.is_focused());

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "bob");
    assert_eq!(app.filter_panel.author.value(), "bob");
    assert_eq!(app.browser.current_index(), Some(0));

    press(&mut app, KeyCode::Enter);

    assert!(!app.filter_panel.is_focused());
    assert_eq!(
        app.dialog,
        Some(Dialog::Notice(Notice::Info("Found 1 track".to_string())))
    );
    assert_eq!(app.browser.active().len(), 1);
}

#[test]
fn mouse_clicks_set_the_volume() {
    let mut app = app();

    click(&mut app, MouseButton::Right);
    assert_eq!(app.browser.volume(), 0);

    click(&mut app, MouseButton::Left);
    assert_eq!(app.browser.volume(), 50);
}

#[test]
fn mouse_clicks_are_ignored_under_the_editor() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));

    click(&mut app, MouseButton::Right);

    assert_eq!(app.browser.volume(), 50);
}

#[test]
fn ticks_sample_a_playing_engine() {
    let mut app = app();

    app.browser.engine_mut().position_ms = 42_500;
    handle_event(&mut app, AppEvent::Tick).unwrap();
    assert_eq!(app.browser.position(), 0);

    app.browser.engine_mut().state = PlayerState::Playing;
    handle_event(&mut app, AppEvent::Tick).unwrap();
    assert_eq!(app.browser.position(), 42);
}

#[test]
fn media_events_update_the_duration() {
    let mut app = app();

    handle_event(
        &mut app,
        AppEvent::Media(MediaStatus::Loaded {
            duration_ms: 180_000,
        }),
    )
    .unwrap();

    assert_eq!(app.browser.duration(), 180);
}

#[test]
fn terminal_forwarding_stops_at_the_first_read_error() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut script = vec![
        Ok(Event::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE))),
        Ok(Event::Resize(80, 24)),
        Err(io::Error::other("terminal closed")),
        Ok(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))),
    ]
    .into_iter();

    forward_terminal_events(|| script.next().unwrap(), &tx);

    let events: Vec<AppEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], AppEvent::Key(key) if key.code == KeyCode::Char('l')));
    assert!(matches!(&events[1], AppEvent::FatalError(message) if message.contains("terminal closed")));
    assert_eq!(script.len(), 1);
}

#[test]
fn terminal_forwarding_stops_when_the_event_loop_is_gone() {
    let (tx, rx) = std::sync::mpsc::channel();
    drop(rx);
    let mut reads = 0;

    forward_terminal_events(
        || {
            reads += 1;
            Ok(Event::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)))
        },
        &tx,
    );

    assert_eq!(reads, 1);
}
