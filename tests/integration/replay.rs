// Replay producer feeding the app through its channel.

use chat_viewport::app::{handle_feed_event, replay::spawn_replay};
use chat_viewport::transcript::{ConnectionStatus, MessageRole, TranscriptFile};
use chat_viewport::ui::theme::STREAM_CURSOR;
use pretty_assertions::assert_eq;
use std::time::Duration;

use crate::helpers::{Harness, conversation, screen_contains};

#[tokio::test]
async fn replay_rebuilds_the_transcript() {
    let mut h = Harness::new();
    let file = TranscriptFile { messages: conversation(3), ..TranscriptFile::default() };

    spawn_replay(file.clone(), h.app.feed_tx.clone(), Duration::from_millis(1))
        .await
        .expect("replay task");

    while let Ok(event) = h.app.feed_rx.try_recv() {
        handle_feed_event(&mut h.app, event);
        let screen = h.draw();
        assert!(h.app.viewport.at_bottom());
        if h.app.status == ConnectionStatus::Streaming {
            assert_eq!(h.app.messages.last().map(|m| m.role), Some(MessageRole::Assistant));
        }
        for row in screen.iter().filter(|row| row.contains(STREAM_CURSOR)) {
            assert!(!row.contains("question number"), "cursor on a user turn: {row}");
        }
    }

    assert_eq!(h.app.messages, file.messages);
    assert_eq!(h.app.status, ConnectionStatus::Ready);
    assert!(h.app.viewport.has_sent_message());
    let screen = h.draw();
    assert!(screen_contains(&screen, "answer number 2"));
}
