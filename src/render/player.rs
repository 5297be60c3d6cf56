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

//! Render the player bar.
//!
//! This module renders the play state, the position gauge with its `mm:ss`
//! label and the volume gauge.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::{PlaybackEngine, PlayerState},
    render::icons::{
        ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_STOP, ICON_VOLUME_HIGH, ICON_VOLUME_LOW,
    },
    util::format::format_time,
};

/// Renders the player widget: now playing line, position and volume.
pub(crate) fn draw_player<P: PlaybackEngine>(f: &mut Frame, area: Rect, app: &App<P>) {
    let theme = &app.theme;
    let browser = &app.browser;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    if let Some(track) = browser.current_track() {
        let icon = match browser.player_state() {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Stopped => ICON_STOP,
        };

        let track_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), bold.fg(theme.commander_colour)),
            Span::styled(track.title.as_str(), bold.fg(theme.accent_colour)),
            Span::raw(" by "),
            Span::styled(track.author.as_str(), bold.fg(theme.accent_colour)),
        ]);
        f.render_widget(Paragraph::new(track_line), info_chunks[0]);
    }

    let time_line = Line::from(vec![
        Span::styled(format_time(browser.position()), bold.fg(theme.accent_colour)),
        Span::styled(" / ", bold.fg(theme.commander_colour)),
        Span::styled(format_time(browser.duration()), bold.fg(theme.accent_colour)),
    ]);
    f.render_widget(
        Paragraph::new(time_line).alignment(Alignment::Right),
        info_chunks[1],
    );

    let ratio = match browser.duration() {
        0 => 0.0,
        duration => (browser.position() as f64 / duration as f64).clamp(0.0, 1.0),
    };
    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[2]);

    let volume_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(20),
            Constraint::Length(5),
        ])
        .split(chunks[3]);

    let volume = browser.volume();
    let volume_icon = match volume {
        0 => ICON_MUTED,
        1..=50 => ICON_VOLUME_LOW,
        _ => ICON_VOLUME_HIGH,
    };
    f.render_widget(Paragraph::new(volume_icon), volume_chunks[1]);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(f64::from(volume) / 100.0)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_chunks[2]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme.commander_colour));
    f.render_widget(volume_label, volume_chunks[3]);
}
