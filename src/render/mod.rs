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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Rendering never changes application state.

mod commander;
mod details;
mod dialog;
mod editor;
mod filter;
mod icons;
mod player;
mod track_list;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding},
};

use crate::{
    App,
    player::PlaybackEngine,
    render::{
        commander::draw_commander, details::draw_details, dialog::draw_dialog,
        editor::draw_editor, filter::draw_filter_panel, player::draw_player,
        track_list::draw_track_list,
    },
    theme::Theme,
};

const FILTER_PANEL_HEIGHT: u16 = 9;

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the track list on the left, the details of the
/// current track and the filter panel on the right, the player bar and the
/// command line at the bottom. The editor and dialogs are drawn on top.
pub(crate) fn draw<P: PlaybackEngine>(f: &mut Frame, app: &App<P>) {
    let area = f.area();

    // Outer layout: main, player, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    // Main layout: track list, side column
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[0]);

    draw_track_list(f, main[0], app);

    let filter_height = if app.filter_panel.is_visible() {
        FILTER_PANEL_HEIGHT
    } else {
        0
    };
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(filter_height)])
        .split(main[1]);

    draw_details(f, side[0], app);
    if app.filter_panel.is_visible() {
        draw_filter_panel(f, side[1], app);
    }

    draw_player(f, outer[1], app);
    draw_commander(f, outer[2], app);

    if let Some(editor) = &app.editor {
        draw_editor(f, area, editor, &app.theme);
    }

    if let Some(dialog) = &app.dialog {
        draw_dialog(f, area, dialog, &app.theme);
    }
}

/// A bordered block, highlighted when it has the focus.
fn panel_block(title: &str, focused: bool, theme: &Theme) -> Block<'static> {
    let colour = if focused {
        theme.focus_colour
    } else {
        theme.border_colour
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
        .title(format!(" {} ", title))
        .padding(Padding::horizontal(1))
}

/// A rectangle of at most `width` by `height`, centred in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
