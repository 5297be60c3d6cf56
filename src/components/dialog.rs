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

//! Blocking notices and confirmations.
//!
//! While a [`Dialog`] is open it receives every key press; nothing else in
//! the application reacts until it is dismissed.

use crossterm::event::{KeyCode, KeyEvent};

use crate::actions::Action;

/// A message for the user, with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Notice::Info(_) => "Information",
            Notice::Warning(_) => "Warning",
            Notice::Error(_) => "Error",
        }
    }

    pub(crate) fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Warning(message) | Notice::Error(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Dialog {
    Notice(Notice),
    Confirm { message: String, on_confirm: Action },
}

/// What a key press did to an open dialog.
#[derive(Debug, PartialEq)]
pub(crate) enum DialogOutcome {
    Pending,
    Dismissed,
    Confirmed(Action),
}

impl Dialog {
    pub(crate) fn confirm(message: impl Into<String>, on_confirm: Action) -> Self {
        Dialog::Confirm {
            message: message.into(),
            on_confirm,
        }
    }

    pub(crate) fn handle_key(&self, key: KeyEvent) -> DialogOutcome {
        match self {
            Dialog::Notice(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => DialogOutcome::Dismissed,
                _ => DialogOutcome::Pending,
            },
            Dialog::Confirm { on_confirm, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    DialogOutcome::Confirmed(on_confirm.clone())
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogOutcome::Dismissed,
                _ => DialogOutcome::Pending,
            },
        }
    }
}
