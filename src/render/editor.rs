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

//! Render the track editor and its file picker.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
    editor::{Editor, EditorField, picker::FilePicker},
    render::{centered_rect, panel_block},
    theme::Theme,
};

const LABEL_WIDTH: usize = 14;

pub(crate) fn draw_editor(f: &mut Frame, area: Rect, editor: &Editor, theme: &Theme) {
    let popup = centered_rect(64, 12, area);
    f.render_widget(Clear, popup);

    let focus = editor.focus();

    let mut lines: Vec<Line> = EditorField::ALL
        .iter()
        .map(|field| {
            let value = match editor.input(*field) {
                Some(input) => input.value().to_string(),
                None => format!("< {} >", editor.genre.label()),
            };
            row(field.label(), value, *field == focus, theme)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "enter save  esc cancel  tab next field  F2 choose file",
        Style::default().fg(theme.border_colour),
    ));

    let block = panel_block(editor.window_title(), true, theme);
    let inner = block.inner(popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);

    match editor.picker() {
        Some(picker) => draw_picker(f, area, picker, theme),
        None => {
            if let Some(input) = editor.input(focus) {
                let line = EditorField::ALL
                    .iter()
                    .position(|field| *field == focus)
                    .unwrap_or(0);
                f.set_cursor_position((
                    inner.x + (LABEL_WIDTH + input.visual_cursor()) as u16,
                    inner.y + line as u16,
                ));
            }
        }
    }
}

fn draw_picker(f: &mut Frame, area: Rect, picker: &FilePicker, theme: &Theme) {
    let popup = centered_rect(48, 14, area);
    f.render_widget(Clear, popup);

    let block = panel_block(picker.kind().title(), true, theme);

    if picker.files().is_empty() {
        let empty = Paragraph::new("No matching files found")
            .style(Style::default().fg(theme.disabled_colour))
            .block(block);
        f.render_widget(empty, popup);
        return;
    }

    let items: Vec<ListItem> = picker
        .files()
        .iter()
        .map(|file| ListItem::new(file.as_str()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.list_selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default().with_selected(Some(picker.selected()));
    f.render_stateful_widget(list, popup, &mut state);
}

fn row(label: &str, value: String, focused: bool, theme: &Theme) -> Line<'static> {
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
        Span::styled(value, value_style),
    ])
}
