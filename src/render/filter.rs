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

//! Render the filter panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    components::filter::FilterField,
    player::PlaybackEngine,
    render::panel_block,
    theme::Theme,
};

const LABEL_WIDTH: usize = 10;

pub(crate) fn draw_filter_panel<P: PlaybackEngine>(f: &mut Frame, area: Rect, app: &App<P>) {
    let theme = &app.theme;
    let panel = &app.filter_panel;
    let focus = panel.focus();

    let rows = [
        (FilterField::Title, "Title", panel.title.value().to_string()),
        (FilterField::Author, "Author", panel.author.value().to_string()),
        (FilterField::Genre, "Genre", format!("< {} >", panel.genre.label())),
        (FilterField::MinDuration, "From", panel.min_duration.label()),
        (FilterField::MaxDuration, "To", panel.max_duration.label()),
    ];

    let mut lines: Vec<Line> = rows
        .iter()
        .map(|(field, label, value)| row(label, value, focus == Some(*field), theme))
        .collect();

    let hint = if panel.is_focused() {
        "enter find  tab next  esc leave"
    } else {
        "/ to edit  f find  c clear"
    };
    lines.push(Line::styled(hint, Style::default().fg(theme.border_colour)));

    let block = panel_block("Filter", panel.is_focused(), theme);
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(lines).block(block), area);

    let cursor = match focus {
        Some(FilterField::Title) => Some((0, panel.title.visual_cursor())),
        Some(FilterField::Author) => Some((1, panel.author.visual_cursor())),
        _ => None,
    };
    if let Some((line, column)) = cursor {
        f.set_cursor_position((
            inner.x + (LABEL_WIDTH + column) as u16,
            inner.y + line,
        ));
    }
}

fn row(label: &str, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let value_style = if focused {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.commander_colour)
    };

    Line::from(vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(theme.border_colour),
        ),
        Span::styled(value.to_string(), value_style),
    ])
}
