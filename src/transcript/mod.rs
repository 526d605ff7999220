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

mod file;
mod votes;

pub use file::{TranscriptFile, load_transcript};
pub use votes::{Vote, VoteIndex};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable message identifier supplied by the message producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for locally produced messages.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// Connection status of the message producer, supplied on every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Ready,
    Submitted,
    Streaming,
    Error,
}

/// Lifecycle of a tool invocation inside an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolState {
    InputStreaming,
    InputAvailable,
    ApprovalRequested,
    ApprovalResponded,
    OutputAvailable,
    OutputError,
    OutputDenied,
}

impl ToolState {
    pub fn label(self) -> &'static str {
        match self {
            Self::InputStreaming => "preparing",
            Self::InputAvailable => "running",
            Self::ApprovalRequested => "awaiting approval",
            Self::ApprovalResponded => "approval sent",
            Self::OutputAvailable => "done",
            Self::OutputError => "failed",
            Self::OutputDenied => "denied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPart {
    pub tool_call_id: String,
    pub tool_name: String,
    pub state: ToolState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

/// Ordered content part of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessagePart {
    Text { text: String },
    Reasoning { text: String },
    Tool(ToolPart),
}

impl MessagePart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Generated when the document omits it.
    #[serde(default = "MessageId::generate")]
    pub id: MessageId,
    pub role: MessageRole,
    #[serde(default)]
    pub parts: Vec<MessagePart>,
}

impl Message {
    pub fn new(id: impl Into<String>, role: MessageRole, parts: Vec<MessagePart>) -> Self {
        Self { id: MessageId::new(id), role, parts }
    }

    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, MessageRole::User, vec![MessagePart::text(text)])
    }

    pub fn assistant(id: impl Into<String>, parts: Vec<MessagePart>) -> Self {
        Self::new(id, MessageRole::Assistant, parts)
    }
}

/// Capability exposed by content that pauses the turn for a user approval.
/// While such content is present the generic thinking placeholder stays hidden.
pub trait ApprovalMarker {
    fn is_approval_interstitial(&self) -> bool;
}

impl ApprovalMarker for ToolState {
    fn is_approval_interstitial(&self) -> bool {
        matches!(self, Self::ApprovalResponded)
    }
}

impl ApprovalMarker for MessagePart {
    fn is_approval_interstitial(&self) -> bool {
        match self {
            Self::Tool(tool) => tool.state.is_approval_interstitial(),
            Self::Text { .. } | Self::Reasoning { .. } => false,
        }
    }
}

impl ApprovalMarker for Message {
    fn is_approval_interstitial(&self) -> bool {
        self.parts.iter().any(ApprovalMarker::is_approval_interstitial)
    }
}
