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

//! Stand-in message producer: plays a stored transcript back the way a live
//! chat backend would deliver it.

use super::feed::FeedEvent;
use crate::transcript::{ConnectionStatus, Message, MessagePart, MessageRole, TranscriptFile};
use std::time::Duration;
use tokio::sync::mpsc;

/// Characters revealed per streamed chunk.
const CHUNK_CHARS: usize = 12;

/// Pause between turns, in chunk delays.
const TURN_PAUSE_CHUNKS: u32 = 8;

/// Event script for `file`: user turns are submitted, assistant turns stream
/// in chunks, the status returns to ready after each reply.
pub fn replay_script(file: &TranscriptFile) -> Vec<FeedEvent> {
    let mut script = vec![FeedEvent::SetVotes(file.votes.clone())];
    let mut submitted = false;
    for message in &file.messages {
        match message.role {
            MessageRole::User => {
                script.push(FeedEvent::Append(message.clone()));
                script.push(FeedEvent::SetStatus(ConnectionStatus::Submitted));
                submitted = true;
            }
            MessageRole::Assistant => {
                // The reply must be the last turn before the status flips.
                script.push(FeedEvent::Append(truncate_message(message, 0)));
                script.push(FeedEvent::SetStatus(ConnectionStatus::Streaming));
                let total = text_len(message);
                let mut shown = 0;
                while shown < total {
                    shown = (shown + CHUNK_CHARS).min(total);
                    script.push(FeedEvent::ReplaceLast(truncate_message(message, shown)));
                }
                // Tool parts without text still need their final state.
                script.push(FeedEvent::ReplaceLast(message.clone()));
                script.push(FeedEvent::SetStatus(ConnectionStatus::Ready));
                submitted = false;
            }
            MessageRole::System => script.push(FeedEvent::Append(message.clone())),
        }
    }
    if submitted {
        script.push(FeedEvent::SetStatus(file.status));
    }
    script
}

/// Play `file` into `tx` with `delay` between events. Stops early when the
/// receiver goes away.
pub fn spawn_replay(
    file: TranscriptFile,
    tx: mpsc::UnboundedSender<FeedEvent>,
    delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let script = replay_script(&file);
        tracing::info!(events = script.len(), "replay started");
        for event in script {
            let pause = match event {
                FeedEvent::SetStatus(ConnectionStatus::Submitted | ConnectionStatus::Ready) => {
                    delay * TURN_PAUSE_CHUNKS
                }
                // Sent together with the `Streaming` status that follows.
                FeedEvent::Append(ref reply) if is_reply_start(reply) => Duration::ZERO,
                _ => delay,
            };
            if tx.send(event).is_err() {
                tracing::debug!("replay receiver dropped");
                return;
            }
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }
        tracing::info!("replay finished");
    })
}

fn is_reply_start(message: &Message) -> bool {
    message.role == MessageRole::Assistant && message.parts.is_empty()
}

fn text_len(message: &Message) -> usize {
    message
        .parts
        .iter()
        .map(|part| match part {
            MessagePart::Text { text } | MessagePart::Reasoning { text } => text.chars().count(),
            MessagePart::Tool(_) => 0,
        })
        .sum()
}

/// `message` with only the first `chars` characters of its text revealed.
/// Parts after the cut are dropped.
fn truncate_message(message: &Message, chars: usize) -> Message {
    let mut budget = chars;
    let mut parts = Vec::new();
    for part in &message.parts {
        match part {
            MessagePart::Text { text } | MessagePart::Reasoning { text } => {
                if budget == 0 {
                    break;
                }
                let len = text.chars().count();
                let cut: String = text.chars().take(budget).collect();
                budget = budget.saturating_sub(len);
                parts.push(match part {
                    MessagePart::Reasoning { .. } => MessagePart::Reasoning { text: cut },
                    _ => MessagePart::Text { text: cut },
                });
            }
            MessagePart::Tool(_) => {
                if budget == 0 && chars < text_len(message) {
                    break;
                }
                parts.push(part.clone());
            }
        }
    }
    Message { id: message.id.clone(), role: message.role, parts }
}
