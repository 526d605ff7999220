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

use super::App;
use super::overlap::ViewportEvent;
use super::scroll::ScrollMode;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(..) => app.viewport.on_resize(),
        _ => {}
    }
}

pub fn handle_viewport_event(app: &mut App, event: ViewportEvent) {
    match event {
        ViewportEvent::LogoVisibility(visible) => {
            tracing::debug!(visible, "logo visibility notification");
            app.logo_visible = Some(visible);
        }
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let rows = app.viewport.config().scroll_lines;
            app.viewport.scroll_up(rows);
        }
        MouseEventKind::ScrollDown => {
            let rows = app.viewport.config().scroll_lines;
            app.viewport.scroll_down(rows);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.viewport.hits_jump_button(mouse.column, mouse.row) {
                app.viewport.jump_to_bottom();
            }
        }
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.viewport.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.viewport.scroll_down(1),
        KeyCode::PageUp => {
            let rows = app.viewport.page_rows();
            app.viewport.scroll_up(rows);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            let rows = app.viewport.page_rows();
            app.viewport.scroll_down(rows);
        }
        KeyCode::Home | KeyCode::Char('g') => app.viewport.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => {
            app.viewport.jump_to_bottom();
        }
        KeyCode::Char('b') if ctrl => app.viewport.scroll_to_bottom(ScrollMode::Instant),
        _ => {}
    }
}
