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

//! Command-line input logic and state management.
//!
//! This module implements a `:` command line. Typing is handled by a text
//! input component, and when a command is submitted it is parsed into an
//! [`Action`] and posted to the application event loop. Commands that cannot
//! be parsed are reported back as a warning notice.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::Action, components::dialog::Notice, events::AppEvent, util::format::parse_time,
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if the command line used it.
    ///
    /// While inactive only `:` is of interest, it activates the command line.
    /// While active every key press belongs to the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    log::debug!("Running command \"{}\"", buffer);
                    let event = match parse_command(&buffer) {
                        Ok(action) => AppEvent::Action(action),
                        Err(message) => AppEvent::Notice(Notice::Warning(message)),
                    };
                    event_tx.send(event)?;
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Parses a command line into an action.
///
/// The error is a message for the user.
pub(crate) fn parse_command(buffer: &str) -> Result<Action, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let action = match parts.as_slice() {
        ["q"] | ["quit"] => Action::Quit,

        ["add"] => Action::Add,
        ["edit"] => Action::Edit,
        ["del"] | ["delete"] => Action::Delete,

        ["find"] => Action::Find,
        ["clear"] => Action::ClearFilter,
        ["filter"] => Action::ToggleFilterPanel,

        ["prev"] => Action::Previous,
        ["next"] => Action::Next,
        ["p"] => Action::TogglePlay,

        ["vol", volume] => match volume.parse::<u8>() {
            Ok(volume) if volume <= 100 => Action::SetVolume(volume),
            _ => return Err(format!("Volume must be between 0 and 100, not \"{}\"", volume)),
        },
        ["mute"] => Action::Mute,

        ["seek", time] => match parse_time(time) {
            Some(seconds) => Action::SeekTo(seconds),
            None => return Err(format!("Expected a time like 01:30, not \"{}\"", time)),
        },

        ["genre", name @ ..] if !name.is_empty() => Action::AddGenre(name.join(" ")),
        ["genre"] => return Err("Usage: genre NAME".to_string()),

        ["reload"] => Action::Reload,

        [] => return Err("No command given".to_string()),

        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
    };

    Ok(action)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn commands_map_to_actions() {
        assert_eq!(parse_command("q"), Ok(Action::Quit));
        assert_eq!(parse_command(" next "), Ok(Action::Next));
        assert_eq!(parse_command("del"), Ok(Action::Delete));
        assert_eq!(parse_command("vol 75"), Ok(Action::SetVolume(75)));
        assert_eq!(parse_command("seek 1:30"), Ok(Action::SeekTo(90)));
        assert_eq!(
            parse_command("genre Progressive  Rock"),
            Ok(Action::AddGenre("Progressive Rock".to_string()))
        );
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(parse_command("vol 101").is_err());
        assert!(parse_command("vol loud").is_err());
        assert!(parse_command("seek soon").is_err());
        assert!(parse_command("genre").is_err());
        assert_eq!(parse_command("dance"), Err("Unknown command: dance".to_string()));
    }

    #[test]
    fn colon_activates_and_enter_submits() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('n')), &tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());

        for c in "next".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        assert_eq!(commander.input.value(), "next");

        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Action(Action::Next))));
    }

    #[test]
    fn unknown_commands_raise_a_warning() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('x')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::Notice(notice)) => assert_eq!(notice.message(), "Unknown command: x"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn escape_abandons_the_command() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(rx.try_recv().is_err());
    }
}
