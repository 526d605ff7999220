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

//! Decorative background logo, centered in the transcript body.

use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const ART: &[&str] = &[
    r"       _~^~^~_       ",
    r"   \) /  o o  \ (/   ",
    r"     '_   -   _'     ",
    r"     / '-----' \     ",
];

fn art_size() -> (u16, u16) {
    let width = ART.iter().map(|l| UnicodeWidthStr::width(*l)).max().unwrap_or(0);
    (u16::try_from(width).unwrap_or(u16::MAX), u16::try_from(ART.len()).unwrap_or(u16::MAX))
}

/// Screen area of the logo inside `body`, or `None` when it does not fit.
pub fn area(body: Rect) -> Option<Rect> {
    let (width, height) = art_size();
    if body.width < width || body.height < height {
        return None;
    }
    Some(Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    })
}

pub fn render(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(theme::LOGO);
    let lines: Vec<Line<'static>> =
        ART.iter().map(|l| Line::from(Span::styled(*l, style))).collect();
    frame.render_widget(Paragraph::new(lines), area);
}
