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

//! Filter criteria input.
//!
//! The panel holds the raw filter inputs: two text fields, a genre selector
//! and two duration pickers. Inputs keep their values while the panel is
//! hidden, only [`FilterPanel::reset`] clears them.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::Action,
    components::{GenreSelect, TimePicker},
    model::filter::{GenreCriterion, TrackFilter},
};

pub(crate) const ANY_GENRE: &str = "Any genre";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterField {
    Title,
    Author,
    Genre,
    MinDuration,
    MaxDuration,
}

impl FilterField {
    const ORDER: [FilterField; 5] = [
        FilterField::Title,
        FilterField::Author,
        FilterField::Genre,
        FilterField::MinDuration,
        FilterField::MaxDuration,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let index = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[index]
    }
}

pub(crate) struct FilterPanel {
    visible: bool,
    focus: Option<FilterField>,

    pub(crate) title: Input,
    pub(crate) author: Input,
    pub(crate) genre: GenreSelect,
    pub(crate) min_duration: TimePicker,
    pub(crate) max_duration: TimePicker,
}

impl FilterPanel {
    pub(crate) fn new(genres: Vec<String>) -> Self {
        Self {
            visible: true,
            focus: None,
            title: Input::default(),
            author: Input::default(),
            genre: GenreSelect::new(genres, ANY_GENRE),
            min_duration: TimePicker::default(),
            max_duration: TimePicker::default(),
        }
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.focus = None;
        }
    }

    pub(crate) fn focus(&self) -> Option<FilterField> {
        self.focus
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    /// Shows the panel and puts the cursor in the first field.
    pub(crate) fn focus_first(&mut self) {
        self.visible = true;
        self.focus = Some(FilterField::Title);
    }

    pub(crate) fn blur(&mut self) {
        self.focus = None;
    }

    pub(crate) fn set_genres(&mut self, genres: Vec<String>) {
        self.genre.set_names(genres);
    }

    /// Builds the filter described by the current inputs.
    pub(crate) fn criteria(&self) -> TrackFilter {
        TrackFilter {
            title: self.title.value().to_string(),
            author: self.author.value().to_string(),
            genre: match self.genre.selected_name() {
                Some(name) => GenreCriterion::Named(name.to_string()),
                None => GenreCriterion::Any,
            },
            min_duration: self.min_duration.seconds(),
            max_duration: self.max_duration.seconds(),
        }
    }

    /// Returns every input to its empty default.
    pub(crate) fn reset(&mut self) {
        self.title.reset();
        self.author.reset();
        self.genre.clear();
        self.min_duration.reset();
        self.max_duration.reset();
    }

    /// Handles a key while the panel has focus.
    ///
    /// Enter runs the filter and escape leaves the panel, both as actions for
    /// the dispatcher. Everything else edits the focused field.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let field = self.focus?;

        match key.code {
            KeyCode::Enter => return Some(Action::Find),
            KeyCode::Esc => return Some(Action::BlurFilter),
            KeyCode::Tab => self.focus = Some(field.step(true)),
            KeyCode::BackTab => self.focus = Some(field.step(false)),
            _ => match field {
                FilterField::Title => {
                    self.title.handle_event(&Event::Key(key));
                }
                FilterField::Author => {
                    self.author.handle_event(&Event::Key(key));
                }
                FilterField::Genre => {
                    self.genre.handle_key(key);
                }
                FilterField::MinDuration => {
                    self.min_duration.handle_key(key);
                }
                FilterField::MaxDuration => {
                    self.max_duration.handle_key(key);
                }
            },
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(panel: &mut FilterPanel, code: KeyCode) -> Option<Action> {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(panel: &mut FilterPanel, text: &str) {
        for c in text.chars() {
            press(panel, KeyCode::Char(c));
        }
    }

    fn panel() -> FilterPanel {
        FilterPanel::new(vec!["Jazz".to_string(), "Rock".to_string()])
    }

    #[test]
    fn an_untouched_panel_matches_everything() {
        assert_eq!(panel().criteria(), TrackFilter::default());
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut panel = panel();

        assert_eq!(press(&mut panel, KeyCode::Enter), None);
        type_text(&mut panel, "abc");

        assert_eq!(panel.title.value(), "");
    }

    #[test]
    fn fields_are_filled_in_tab_order() {
        let mut panel = panel();
        panel.focus_first();

        type_text(&mut panel, "song");
        press(&mut panel, KeyCode::Tab);
        type_text(&mut panel, "ann");
        press(&mut panel, KeyCode::Tab);
        press(&mut panel, KeyCode::Right);
        press(&mut panel, KeyCode::Right);
        press(&mut panel, KeyCode::Tab);
        press(&mut panel, KeyCode::Up);
        press(&mut panel, KeyCode::Tab);
        press(&mut panel, KeyCode::Up);
        press(&mut panel, KeyCode::Up);
        press(&mut panel, KeyCode::Right);

        assert_eq!(
            panel.criteria(),
            TrackFilter {
                title: "song".to_string(),
                author: "ann".to_string(),
                genre: GenreCriterion::Named("Rock".to_string()),
                min_duration: 60,
                max_duration: 121,
            }
        );

        assert_eq!(press(&mut panel, KeyCode::Enter), Some(Action::Find));
        assert_eq!(press(&mut panel, KeyCode::Esc), Some(Action::BlurFilter));
    }

    #[test]
    fn back_tab_wraps_to_the_last_field() {
        let mut panel = panel();
        panel.focus_first();

        press(&mut panel, KeyCode::BackTab);

        assert_eq!(panel.focus(), Some(FilterField::MaxDuration));
    }

    #[test]
    fn reset_clears_every_input() {
        let mut panel = panel();
        panel.focus_first();
        type_text(&mut panel, "song");
        panel.genre.select_name(Some("Jazz"));
        panel.max_duration.set_seconds(300);

        panel.reset();

        assert_eq!(panel.criteria(), TrackFilter::default());
        assert_eq!(panel.genre.label(), ANY_GENRE);
    }

    #[test]
    fn hiding_keeps_the_inputs() {
        let mut panel = panel();
        panel.focus_first();
        type_text(&mut panel, "song");

        panel.toggle_visible();
        assert!(!panel.is_visible());
        assert!(!panel.is_focused());

        panel.toggle_visible();
        assert_eq!(panel.criteria().title, "song");
    }
}
