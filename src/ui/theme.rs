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

use crate::transcript::{ConnectionStatus, ToolState};
use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(110, 160, 255);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";

// Background logo (faded)
pub const LOGO: Color = Color::Rgb(58, 70, 96);

// Role header colors
pub const ROLE_USER: Color = Color::White;
pub const ROLE_ASSISTANT: Color = ACCENT;
pub const ROLE_SYSTEM: Color = Color::Yellow;

// User message background
pub const USER_MSG_BG: Color = Color::Rgb(40, 44, 52);

// Votes
pub const VOTE_UP: Color = Color::Green;
pub const VOTE_DOWN: Color = Color::Red;

// Tool status icons
pub const ICON_PENDING: &str = "◌";
pub const ICON_RUNNING: &str = "⏵";
pub const ICON_APPROVAL: &str = "?";
pub const ICON_COMPLETED: &str = "✓";
pub const ICON_FAILED: &str = "✗";

pub const STREAM_CURSOR: &str = "▍";

pub const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

pub fn spinner(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Icon + color for a tool part.
pub fn tool_state_icon(state: ToolState) -> (&'static str, Color) {
    match state {
        ToolState::InputStreaming => (ICON_PENDING, DIM),
        ToolState::InputAvailable => (ICON_RUNNING, Color::Cyan),
        ToolState::ApprovalRequested | ToolState::ApprovalResponded => {
            (ICON_APPROVAL, Color::Yellow)
        }
        ToolState::OutputAvailable => (ICON_COMPLETED, Color::Green),
        ToolState::OutputError | ToolState::OutputDenied => (ICON_FAILED, Color::Red),
    }
}

pub fn status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Ready => DIM,
        ConnectionStatus::Submitted | ConnectionStatus::Streaming => ACCENT,
        ConnectionStatus::Error => Color::Red,
    }
}
