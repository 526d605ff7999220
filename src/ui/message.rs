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

use crate::app::TurnDescriptor;
use crate::transcript::{MessagePart, MessageRole, ToolPart, Vote};
use crate::ui::theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render one turn into owned lines. Content is shown as plain text.
pub fn render_turn(
    turn: &TurnDescriptor<'_>,
    spinner_frame: usize,
    bottom_padding: usize,
) -> Vec<Line<'static>> {
    let msg = turn.message;
    let mut out = vec![role_header(msg.role, turn.vote)];

    // Streaming reply with no content yet
    if msg.parts.is_empty() && turn.is_actively_streaming {
        out.push(spinner_line(spinner_frame));
    }

    let bg = matches!(msg.role, MessageRole::User).then_some(theme::USER_MSG_BG);
    for part in &msg.parts {
        match part {
            MessagePart::Text { text } => {
                let style = bg.map_or_else(Style::default, |c| Style::default().bg(c));
                out.extend(text.split('\n').map(|l| Line::from(Span::styled(l.to_owned(), style))));
            }
            MessagePart::Reasoning { text } => {
                let style = Style::default().fg(theme::DIM).add_modifier(Modifier::ITALIC);
                out.push(Line::from(Span::styled("∴ Reasoning", style)));
                out.extend(
                    text.split('\n').map(|l| Line::from(Span::styled(format!("  {l}"), style))),
                );
            }
            MessagePart::Tool(tool) => out.push(tool_line(tool)),
        }
    }

    if turn.is_actively_streaming
        && !msg.parts.is_empty()
        && let Some(last) = out.last_mut()
    {
        last.push_span(Span::styled(theme::STREAM_CURSOR, Style::default().fg(theme::ACCENT)));
    }

    if turn.interactive && msg.role == MessageRole::Assistant && !turn.is_actively_streaming {
        out.push(action_row(turn.vote));
    }

    if turn.reserves_bottom_padding {
        out.extend(std::iter::repeat_n(Line::default(), bottom_padding));
    }
    out
}

/// Placeholder turn while the request is submitted and nothing has arrived.
pub fn thinking_lines(spinner_frame: usize) -> Vec<Line<'static>> {
    vec![role_header(MessageRole::Assistant, None), spinner_line(spinner_frame)]
}

fn role_header(role: MessageRole, vote: Option<&Vote>) -> Line<'static> {
    let (label, color) = match role {
        MessageRole::User => ("You", theme::ROLE_USER),
        MessageRole::Assistant => ("Assistant", theme::ROLE_ASSISTANT),
        MessageRole::System => ("System", theme::ROLE_SYSTEM),
    };
    let mut line =
        Line::from(Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)));
    if let Some(vote) = vote {
        let (mark, color) =
            if vote.is_upvoted { (" ▲", theme::VOTE_UP) } else { (" ▼", theme::VOTE_DOWN) };
        line.push_span(Span::styled(mark, Style::default().fg(color)));
    }
    line
}

fn spinner_line(frame: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} Thinking...", theme::spinner(frame)),
        Style::default().fg(theme::DIM),
    ))
}

fn tool_line(tool: &ToolPart) -> Line<'static> {
    let (icon, color) = theme::tool_state_icon(tool.state);
    Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color)),
        Span::styled(tool.tool_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" · {}", tool.state.label()), Style::default().fg(theme::DIM)),
    ])
}

/// Copy / vote controls under a finished assistant turn.
fn action_row(vote: Option<&Vote>) -> Line<'static> {
    let dim = Style::default().fg(theme::DIM);
    let up = if vote.is_some_and(|v| v.is_upvoted) { dim.fg(theme::VOTE_UP) } else { dim };
    let down = if vote.is_some_and(|v| !v.is_upvoted) { dim.fg(theme::VOTE_DOWN) } else { dim };
    Line::from(vec![
        Span::styled("  ⧉ copy", dim),
        Span::styled("   ▲ upvote", up),
        Span::styled("   ▼ downvote", down),
    ])
}
