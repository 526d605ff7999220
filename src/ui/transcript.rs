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

use crate::app::{App, LayoutSnapshot, PlanInput, Placeholder, plan_transcript};
use crate::ui::{greeting, jump, logo, message};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};

/// A laid-out block of the transcript.
struct Block {
    lines: Vec<Line<'static>>,
    /// Wrapped height of each entry in `lines`.
    line_heights: Vec<usize>,
    /// Wrapped height in rows.
    height: usize,
    /// Widest row, capped at the body width. Messages are hit-tested by the
    /// extent of their text, not by the full column, so a short reply beside
    /// the logo leaves it visible.
    width: u16,
    /// Messages take part in the overlap test; placeholders do not.
    is_message: bool,
}

/// Rows between turns.
const TURN_GAP: usize = 1;

/// Layout pass then paint pass. The scroll anchor and the overlap detector
/// both read the geometry measured here, after the new content is known.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let blocks = layout_blocks(app, area.width);
    let content_height = blocks_height(&blocks);
    let scroll_top = app.viewport.apply_layout(area, content_height);

    let anchor = if app.viewport.config().show_logo { logo::area(area) } else { None };
    let message_rects = message_rects(&blocks, area, scroll_top);
    let jump_area = if app.viewport.jump_visible() { jump::area(area) } else { None };
    let logo_visible =
        app.viewport.record_geometry(LayoutSnapshot { anchor, message_rects }, jump_area);

    if logo_visible && let Some(logo_area) = anchor {
        logo::render(frame, logo_area);
    }

    let (lines, offset) = visible_lines(blocks, scroll_top, usize::from(area.height));
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }).scroll((offset, 0)),
        area,
    );

    if let Some(jump_area) = jump_area {
        jump::render(frame, jump_area);
    }
}

fn layout_blocks(app: &App, width: u16) -> Vec<Block> {
    let plan = plan_transcript(PlanInput {
        messages: &app.messages,
        status: app.status,
        votes: Some(&app.votes),
        has_sent_message: app.viewport.has_sent_message(),
        is_readonly: app.readonly,
    });
    let padding = app.viewport.config().bottom_padding;

    let mut blocks: Vec<Block> = plan
        .turns
        .iter()
        .map(|turn| measure(message::render_turn(turn, app.spinner_frame, padding), width, true))
        .collect();
    match plan.placeholder {
        Some(Placeholder::Greeting) => blocks.push(measure(greeting::lines(), width, false)),
        Some(Placeholder::Thinking) => {
            blocks.push(measure(message::thinking_lines(app.spinner_frame), width, false));
        }
        None => {}
    }
    blocks
}

fn measure(lines: Vec<Line<'static>>, width: u16, is_message: bool) -> Block {
    let widest = lines.iter().map(Line::width).max().unwrap_or(0);
    let line_heights: Vec<usize> = lines
        .iter()
        .map(|line| Paragraph::new(line.clone()).wrap(Wrap { trim: false }).line_count(width))
        .collect();
    Block {
        lines,
        height: line_heights.iter().sum(),
        line_heights,
        width: u16::try_from(widest).unwrap_or(u16::MAX).min(width),
        is_message,
    }
}

fn blocks_height(blocks: &[Block]) -> usize {
    let gaps = blocks.len().saturating_sub(1) * TURN_GAP;
    blocks.iter().map(|b| b.height).sum::<usize>() + gaps
}

/// Lines overlapping `[scroll_top, scroll_top + view_height)`, plus the rows
/// of the first one that sit above the view. The offset is below the wrapped
/// height of a single line, however long the transcript is.
fn visible_lines(
    blocks: Vec<Block>,
    scroll_top: usize,
    view_height: usize,
) -> (Vec<Line<'static>>, usize) {
    let view_end = scroll_top + view_height;
    let mut out = Vec::new();
    let mut first_row = None;
    let mut y = 0;
    for (i, block) in blocks.into_iter().enumerate() {
        let gap = std::iter::repeat_n((Line::default(), 1), if i > 0 { TURN_GAP } else { 0 });
        for (line, height) in gap.chain(block.lines.into_iter().zip(block.line_heights)) {
            let start = y;
            y += height;
            if y <= scroll_top {
                continue;
            }
            if start >= view_end {
                return (out, first_row.map_or(0, |row| scroll_top.saturating_sub(row)));
            }
            if first_row.is_none() {
                first_row = Some(start);
            }
            out.push(line);
        }
    }
    (out, first_row.map_or(0, |row| scroll_top.saturating_sub(row)))
}

/// Screen rectangles of the message blocks that are at least partly visible.
fn message_rects(blocks: &[Block], body: Rect, scroll_top: usize) -> Vec<Rect> {
    let view_end = scroll_top + usize::from(body.height);
    let mut rects = Vec::new();
    let mut y = 0;
    for block in blocks {
        let (start, end) = (y, y + block.height);
        y = end + TURN_GAP;
        if !block.is_message || end <= scroll_top || start >= view_end {
            continue;
        }
        let top = start.max(scroll_top) - scroll_top;
        let bottom = end.min(view_end) - scroll_top;
        let (Ok(top), Ok(height)) = (u16::try_from(top), u16::try_from(bottom - top)) else {
            continue;
        };
        rects.push(Rect { x: body.x, y: body.y + top, width: block.width, height });
    }
    rects
}
