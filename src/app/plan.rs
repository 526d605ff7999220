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

use crate::transcript::{ApprovalMarker, ConnectionStatus, Message, Vote, VoteIndex};

/// Extra turn appended after (or instead of) the message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Empty transcript: greeting instead of any message.
    Greeting,
    /// Request submitted, no reply content yet.
    Thinking,
}

/// Per-message render decisions.
#[derive(Debug, Clone, Copy)]
pub struct TurnDescriptor<'a> {
    pub index: usize,
    pub message: &'a Message,
    /// Last message while the producer is streaming.
    pub is_actively_streaming: bool,
    /// Last message once the user has sent anything in this view.
    pub reserves_bottom_padding: bool,
    pub vote: Option<&'a Vote>,
    /// False in read-only transcripts: no vote or approval affordances.
    pub interactive: bool,
}

#[derive(Debug, Clone)]
pub struct TranscriptPlan<'a> {
    pub turns: Vec<TurnDescriptor<'a>>,
    pub placeholder: Option<Placeholder>,
}

/// Inputs for one render of the transcript.
#[derive(Debug, Clone, Copy)]
pub struct PlanInput<'a> {
    pub messages: &'a [Message],
    pub status: ConnectionStatus,
    pub votes: Option<&'a VoteIndex>,
    pub has_sent_message: bool,
    pub is_readonly: bool,
}

pub fn plan_transcript(input: PlanInput<'_>) -> TranscriptPlan<'_> {
    let PlanInput { messages, status, votes, has_sent_message, is_readonly } = input;

    if messages.is_empty() {
        return TranscriptPlan { turns: Vec::new(), placeholder: Some(Placeholder::Greeting) };
    }

    let last = messages.len() - 1;
    let turns = messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            debug_assert!(!message.id.is_empty(), "message at index {index} has no id");
            let is_last = index == last;
            TurnDescriptor {
                index,
                message,
                is_actively_streaming: status == ConnectionStatus::Streaming && is_last,
                reserves_bottom_padding: has_sent_message && is_last,
                vote: votes.and_then(|v| v.get(&message.id)),
                interactive: !is_readonly,
            }
        })
        .collect();

    TranscriptPlan { turns, placeholder: thinking_placeholder(messages, status) }
}

/// An approval interstitial already tells the user what is going on, so the
/// generic thinking turn is suppressed while one is present.
fn thinking_placeholder(messages: &[Message], status: ConnectionStatus) -> Option<Placeholder> {
    let awaiting = status == ConnectionStatus::Submitted
        && !messages.iter().any(ApprovalMarker::is_approval_interstitial);
    awaiting.then_some(Placeholder::Thinking)
}
