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
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

pub const LABEL: &str = "[ \u{2193} ]";
const WIDTH: u16 = 5;

/// Jump-to-bottom button: centered on the last row of the body.
pub fn area(body: Rect) -> Option<Rect> {
    if body.width < WIDTH || body.height == 0 {
        return None;
    }
    Some(Rect {
        x: body.x + (body.width - WIDTH) / 2,
        y: body.bottom() - 1,
        width: WIDTH,
        height: 1,
    })
}

pub fn render(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        LABEL,
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line), area);
}
