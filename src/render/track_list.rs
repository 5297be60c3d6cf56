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

//! Render the active track list, with the current track highlighted.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::{App, player::PlaybackEngine, render::panel_block, util::format::format_time};

pub(crate) fn draw_track_list<P: PlaybackEngine>(f: &mut Frame, area: Rect, app: &App<P>) {
    let theme = &app.theme;
    let browser = &app.browser;
    let tracks = browser.active();

    let title = if browser.is_filtered() {
        format!("Filtered {} of {}", tracks.len(), browser.full_len())
    } else {
        format!("Library ({})", tracks.len())
    };
    let block = panel_block(&title, false, theme);

    if tracks.is_empty() {
        let empty = Paragraph::new("No tracks yet, press 'a' to add one")
            .style(Style::default().fg(theme.disabled_colour))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows = tracks.iter().map(|track| {
        Row::new(vec![
            Cell::from(Line::from(track.title.as_str()).style(Style::default().fg(theme.list_title_fg))),
            Cell::from(Line::from(track.author.as_str()).style(Style::default().fg(theme.list_author_fg))),
            Cell::from(
                Line::from(track.genre.as_deref().unwrap_or("")).style(Style::default().fg(theme.list_genre_fg)),
            ),
            Cell::from(
                Line::from(format_time(u64::from(track.duration)))
                    .style(Style::default().fg(theme.list_time_fg))
                    .alignment(Alignment::Right),
            ),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Title"),
            Cell::from("Author"),
            Cell::from("Genre"),
            Cell::from(Line::from("Time").alignment(Alignment::Right)),
        ])
        .style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1),
    )
    .row_highlight_style(
        Style::default()
            .bg(theme.list_selected_bg)
            .add_modifier(Modifier::BOLD),
    )
    .block(block);

    let mut state = TableState::default().with_selected(browser.current_index());
    f.render_stateful_widget(table, area, &mut state);
}
