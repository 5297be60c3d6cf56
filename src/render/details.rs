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

//! Render the details of the current track and the control bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    App,
    browser::Artwork,
    player::{PlaybackEngine, PlayerState},
    render::{
        icons::{ICON_IMAGE, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV},
        panel_block,
    },
    theme::Theme,
    util::format::format_time,
};

pub(crate) fn draw_details<P: PlaybackEngine>(f: &mut Frame, area: Rect, app: &App<P>) {
    let theme = &app.theme;
    let browser = &app.browser;

    let mut lines = match browser.current_track() {
        Some(track) => {
            let artwork = match browser.artwork() {
                Some(Artwork::Image(path)) => path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                _ => "default artwork".to_string(),
            };

            vec![
                field("Title", &track.title, theme),
                field("Author", &track.author, theme),
                field("Genre", track.genre.as_deref().unwrap_or("-"), theme),
                field("Duration", &format_time(u64::from(track.duration)), theme),
                Line::from(vec![
                    Span::raw(format!("{} ", ICON_IMAGE)),
                    Span::styled(artwork, Style::default().fg(theme.list_genre_fg)),
                ]),
            ]
        }
        None => vec![Line::styled(
            "Nothing selected",
            Style::default().fg(theme.disabled_colour),
        )],
    };

    let controls = browser.controls();
    let play_label = match browser.player_state() {
        PlayerState::Playing => format!("{} pause", ICON_PAUSE),
        PlayerState::Paused | PlayerState::Stopped => format!("{} play", ICON_PLAY),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        control(&format!("{} prev", ICON_PREV), controls.previous, theme),
        control(&play_label, controls.play, theme),
        control(&format!("{} next", ICON_NEXT), controls.next, theme),
    ]));
    lines.push(Line::from(vec![
        control("[a]dd", true, theme),
        control("[e]dit", controls.edit, theme),
        control("[d]elete", controls.delete, theme),
        control("[c]lear filter", controls.clear_filter, theme),
    ]));

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel_block("Track", false, theme));

    f.render_widget(details, area);
}

fn field(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(theme.border_colour)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn control(label: &str, enabled: bool, theme: &Theme) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(theme.commander_colour)
    } else {
        Style::default()
            .fg(theme.disabled_colour)
            .add_modifier(Modifier::CROSSED_OUT)
    };

    Span::styled(format!("{}  ", label), style)
}
