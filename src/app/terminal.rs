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

use crate::error::AppError;
use ratatui::DefaultTerminal;

/// Owns the terminal while the viewport is mounted: raw mode, alternate
/// screen and mouse capture are released on drop, including on error paths.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub fn acquire() -> anyhow::Result<Self> {
        let terminal = ratatui::try_init().map_err(|e| {
            anyhow::Error::new(AppError::TerminalUnavailable)
                .context(format!("failed to initialize terminal: {e}"))
        })?;
        let guard = Self { terminal };
        // Mouse capture is required for wheel scrolling and the jump button.
        crossterm::execute!(
            std::io::stdout(),
            crossterm::event::EnableMouseCapture,
            crossterm::event::EnableFocusChange,
        )?;
        tracing::debug!("terminal acquired");
        Ok(guard)
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableMouseCapture,
            crossterm::event::DisableFocusChange,
        );
        ratatui::restore();
        tracing::debug!("terminal released");
    }
}
