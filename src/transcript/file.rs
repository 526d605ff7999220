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

use super::{ConnectionStatus, Message, MessageId, Vote};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk transcript document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFile {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub status: ConnectionStatus,
}

pub fn load_transcript(path: &Path) -> anyhow::Result<TranscriptFile> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(anyhow::Error::new(AppError::TranscriptNotFound)
                .context(format!("transcript {} does not exist", path.display())));
        }
        Err(err) => {
            return Err(anyhow::anyhow!("failed to read transcript {}: {err}", path.display()));
        }
    };

    let mut file: TranscriptFile = serde_json::from_str(&raw).map_err(|err| {
        anyhow::Error::new(AppError::TranscriptInvalid)
            .context(format!("transcript {} is not valid JSON: {err}", path.display()))
    })?;

    // Turns are keyed by id; blank ones get a fresh id instead.
    for (index, message) in file.messages.iter_mut().enumerate() {
        if message.id.is_empty() {
            message.id = MessageId::generate();
            tracing::warn!(index, id = %message.id, "message without id; generated one");
        }
    }

    tracing::info!(
        path = %path.display(),
        messages = file.messages.len(),
        votes = file.votes.len(),
        "loaded transcript"
    );
    Ok(file)
}
