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
use crate::transcript::{ConnectionStatus, Message, Vote, VoteIndex};

/// Updates from whoever owns the message sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    SetStatus(ConnectionStatus),
    Append(Message),
    /// Replace the last message (streamed content grew in place).
    ReplaceLast(Message),
    SetVotes(Vec<Vote>),
    /// Replace the whole transcript.
    Reset(Vec<Message>),
}

pub fn handle_feed_event(app: &mut App, event: FeedEvent) {
    match event {
        FeedEvent::SetStatus(status) => {
            if app.status != status {
                tracing::debug!(from = ?app.status, to = ?status, "connection status changed");
            }
            app.status = status;
            app.viewport.on_status(status);
        }
        FeedEvent::Append(message) => {
            app.messages.push(message);
            app.viewport.on_content_changed();
        }
        FeedEvent::ReplaceLast(message) => {
            let Some(last) = app.messages.last_mut() else {
                tracing::warn!(id = %message.id, "replace-last on an empty transcript; appending");
                app.messages.push(message);
                app.viewport.on_content_changed();
                return;
            };
            if *last != message {
                *last = message;
                app.viewport.on_content_changed();
            }
        }
        FeedEvent::SetVotes(votes) => {
            app.votes = VoteIndex::new(votes);
        }
        FeedEvent::Reset(messages) => {
            let changed =
                messages.len() != app.messages.len() || messages.last() != app.messages.last();
            app.messages = messages;
            if changed {
                app.viewport.on_content_changed();
            }
        }
    }
}
