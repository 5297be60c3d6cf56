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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_colour: Color,
    pub(crate) disabled_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) info_colour: Color,
    pub(crate) warning_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) list_time_fg: Color,
    pub(crate) list_author_fg: Color,
    pub(crate) list_genre_fg: Color,
    pub(crate) list_title_fg: Color,
    pub(crate) list_selected_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_colour: Color::Rgb(179, 157, 219),
            disabled_colour: Color::Rgb(90, 80, 100),
            gauge_track_colour: Color::Rgb(50, 30, 60),
            commander_colour: Color::Rgb(255, 255, 255),

            info_colour: Color::Rgb(130, 200, 160),
            warning_colour: Color::Rgb(250, 189, 47),
            error_colour: Color::Rgb(235, 100, 100),

            list_time_fg: Color::Rgb(162, 161, 166),
            list_author_fg: Color::Rgb(255, 215, 0),
            list_genre_fg: Color::Rgb(179, 157, 219),
            list_title_fg: Color::Rgb(255, 255, 255),
            list_selected_bg: Color::Rgb(70, 45, 85),
        }
    }
}
