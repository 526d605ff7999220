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

use crate::app::App;
use crate::transcript::ConnectionStatus;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const FOOTER_PAD: u16 = 2;

/// Status on the left, key hints on the right. The hint gives way first
/// when the row is narrow.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };
    let status = status_line(app);
    let hint = Line::from(Span::styled(hint_text(app), Style::default().fg(theme::DIM)));
    let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Length(status_width), Constraint::Fill(1)]).areas(padded);

    frame.render_widget(Paragraph::new(status), left);
    if usize::from(right.width) > hint.width() {
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), right);
    }
}

fn status_line(app: &App) -> Line<'static> {
    let color = theme::status_color(app.status);
    let label = match app.status {
        ConnectionStatus::Ready => "ready".to_owned(),
        ConnectionStatus::Submitted => format!("{} submitted", theme::spinner(app.spinner_frame)),
        ConnectionStatus::Streaming => format!("{} streaming", theme::spinner(app.spinner_frame)),
        ConnectionStatus::Error => "error".to_owned(),
    };
    let mut spans = vec![Span::styled(format!("[{label}]"), Style::default().fg(color))];
    if app.readonly {
        spans.push(Span::styled("  read-only", Style::default().fg(Color::Yellow)));
    }
    if let Some(visible) = app.logo_visible {
        let text = if visible { "  logo: visible" } else { "  logo: hidden" };
        spans.push(Span::styled(text, Style::default().fg(theme::DIM)));
    }
    Line::from(spans)
}

fn hint_text(app: &App) -> &'static str {
    if app.viewport.jump_visible() {
        "End: jump to latest | q: quit"
    } else {
        "\u{2191}/\u{2193}: scroll | q: quit"
    }
}
