// chat_viewport - A terminal transcript viewport for AI chat sessions
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::ui::theme;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Shown in place of the message list while the transcript is empty.
pub fn lines() -> Vec<Line<'static>> {
    let pad = "  ";
    vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{pad}Hello there!"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{pad}How can I help you today?"),
            Style::default().fg(theme::DIM),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "{pad}Tips: wheel or \u{2191}/\u{2193} to scroll, End to jump to latest, q to quit"
            ),
            Style::default().fg(theme::DIM),
        )),
    ]
}
