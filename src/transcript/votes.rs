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

use super::MessageId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user rating attached to one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub message_id: MessageId,
    pub is_upvoted: bool,
}

/// O(1) lookup: message_id → vote.
///
/// Built once per vote-set change instead of scanning the set for every
/// message on every frame. When the set holds several votes for the same
/// message the first one wins, same as a linear `find`.
#[derive(Debug, Default)]
pub struct VoteIndex {
    votes: Vec<Vote>,
    by_message: HashMap<MessageId, usize>,
}

impl VoteIndex {
    pub fn new(votes: Vec<Vote>) -> Self {
        let mut by_message = HashMap::with_capacity(votes.len());
        for (i, vote) in votes.iter().enumerate() {
            by_message.entry(vote.message_id.clone()).or_insert(i);
        }
        Self { votes, by_message }
    }

    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&Vote> {
        self.by_message.get(id).and_then(|&i| self.votes.get(i))
    }
}
