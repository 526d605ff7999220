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

use super::feed::FeedEvent;
use super::overlap::{ChannelSink, ViewportEvent};
use super::viewport::{TranscriptViewport, ViewportConfig};
use crate::transcript::{ConnectionStatus, Message, TranscriptFile, VoteIndex};
use tokio::sync::mpsc;

pub struct App {
    /// Transcript as last delivered by the producer. Never edited here.
    pub messages: Vec<Message>,
    pub status: ConnectionStatus,
    pub votes: VoteIndex,
    /// Read-only transcripts hide per-message affordances.
    pub readonly: bool,
    pub viewport: TranscriptViewport,
    pub should_quit: bool,
    pub spinner_frame: usize,
    /// Last logo visibility reported through the viewport's sink.
    pub logo_visible: Option<bool>,
    pub feed_tx: mpsc::UnboundedSender<FeedEvent>,
    pub feed_rx: mpsc::UnboundedReceiver<FeedEvent>,
    pub viewport_rx: mpsc::UnboundedReceiver<ViewportEvent>,
}

impl App {
    pub fn new(config: ViewportConfig, readonly: bool) -> Self {
        let (feed_tx, feed_rx) = mpsc::unbounded_channel();
        let (viewport_tx, viewport_rx) = mpsc::unbounded_channel();
        Self {
            messages: Vec::new(),
            status: ConnectionStatus::Ready,
            votes: VoteIndex::default(),
            readonly,
            viewport: TranscriptViewport::mount(config, Box::new(ChannelSink(viewport_tx))),
            should_quit: false,
            spinner_frame: 0,
            logo_visible: None,
            feed_tx,
            feed_rx,
            viewport_rx,
        }
    }

    /// Show a whole transcript at once.
    pub fn load(&mut self, file: TranscriptFile) {
        let TranscriptFile { messages, votes, status } = file;
        self.votes = VoteIndex::new(votes);
        self.messages = messages;
        self.status = status;
        self.viewport.on_status(status);
        self.viewport.on_content_changed();
    }

    /// Whether the producer is mid-turn (drives the spinner).
    pub fn is_busy(&self) -> bool {
        matches!(self.status, ConnectionStatus::Submitted | ConnectionStatus::Streaming)
    }

    /// Minimal `App` for tests: default config, no terminal.
    #[doc(hidden)]
    pub fn test_default() -> Self {
        Self::new(ViewportConfig::default(), false)
    }
}
