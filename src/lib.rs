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

pub mod app;
pub mod error;
pub mod transcript;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chat-viewport", about = "Terminal viewer for AI chat transcripts", version)]
pub struct Cli {
    /// JSON transcript to open (starts empty when omitted)
    pub transcript: Option<PathBuf>,

    /// Stream the transcript turn by turn instead of showing it at once
    #[arg(long)]
    pub replay: bool,

    /// Delay between streamed chunks in replay mode
    #[arg(long, value_name = "MS", default_value_t = 30)]
    pub chunk_delay_ms: u64,

    /// Hide vote and approval affordances on messages
    #[arg(long)]
    pub readonly: bool,

    /// Disable the background logo
    #[arg(long)]
    pub no_logo: bool,

    /// Rows from the end that still count as scrolled to the bottom
    #[arg(long, value_name = "ROWS", default_value_t = 1)]
    pub tolerance: usize,

    /// Rows scrolled per mouse wheel notch
    #[arg(long, value_name = "ROWS", default_value_t = 3)]
    pub scroll_lines: usize,

    /// Blank rows reserved below the newest turn after the first send
    #[arg(long, value_name = "ROWS", default_value_t = 4)]
    pub bottom_padding: usize,

    /// Write tracing diagnostics to a file (disabled by default)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives (example: `info,chat_viewport=debug`)
    /// Falls back to `RUST_LOG` when omitted.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to `--log-file` instead of truncating on startup
    #[arg(long)]
    pub log_append: bool,
}
