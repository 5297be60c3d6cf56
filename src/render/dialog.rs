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

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::dialog::{Dialog, Notice},
    render::centered_rect,
    theme::Theme,
};

pub(crate) fn draw_dialog(f: &mut Frame, area: Rect, dialog: &Dialog, theme: &Theme) {
    let (title, message, hint, colour) = match dialog {
        Dialog::Notice(notice) => {
            let colour = match notice {
                Notice::Info(_) => theme.info_colour,
                Notice::Warning(_) => theme.warning_colour,
                Notice::Error(_) => theme.error_colour,
            };
            (notice.title(), notice.message(), "enter to close", colour)
        }
        Dialog::Confirm { message, .. } => {
            ("Confirm", message.as_str(), "y yes  n no", theme.warning_colour)
        }
    };

    let popup = centered_rect(50, 7, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
        .title(format!(" {} ", title))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.background_colour));

    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::styled(hint, Style::default().fg(theme.border_colour)),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(paragraph, popup);
}
