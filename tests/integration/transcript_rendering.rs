// What the transcript body shows for each combination of messages and
// connection status.

use chat_viewport::app::FeedEvent;
use chat_viewport::transcript::{
    ConnectionStatus, Message, MessageId, MessagePart, ToolPart, ToolState, Vote,
};
use chat_viewport::ui::theme::STREAM_CURSOR;
use pretty_assertions::assert_eq;

use crate::helpers::{Harness, assistant, conversation, screen_contains, user};

fn approval(state: ToolState) -> Message {
    Message::assistant(
        "a1",
        vec![MessagePart::Tool(ToolPart {
            tool_call_id: "call-1".into(),
            tool_name: "getWeather".into(),
            state,
            input: None,
            output: None,
        })],
    )
}

#[test]
fn empty_transcript_shows_greeting() {
    let mut h = Harness::new();
    let screen = h.draw();
    assert!(screen_contains(&screen, "Hello there!"));
    assert!(screen_contains(&screen, "How can I help you today?"));
    assert!(!screen_contains(&screen, "Thinking..."));
}

#[test]
fn greeting_wins_over_thinking_on_empty_transcript() {
    let mut h = Harness::new();
    h.feed(FeedEvent::SetStatus(ConnectionStatus::Submitted));
    let screen = h.draw();
    assert!(screen_contains(&screen, "Hello there!"));
    assert!(!screen_contains(&screen, "Thinking..."));
}

#[test]
fn streaming_turn_scenario() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Append(user("m1", "What is the weather?")));
    h.feed(FeedEvent::SetStatus(ConnectionStatus::Submitted));
    let screen = h.draw();
    assert!(screen_contains(&screen, "What is the weather?"));
    assert!(screen_contains(&screen, "Thinking..."));
    assert!(!screen_contains(&screen, "Hello there!"));

    h.feed(FeedEvent::SetStatus(ConnectionStatus::Streaming));
    h.feed(FeedEvent::Append(assistant("m2", "Sun")));
    let screen = h.draw();
    assert!(screen_contains(&screen, &format!("Sun{STREAM_CURSOR}")));
    assert!(!screen_contains(&screen, "Thinking..."));
    assert!(h.app.viewport.at_bottom());

    h.feed(FeedEvent::ReplaceLast(assistant("m2", "Sunny and warm")));
    let screen = h.draw();
    assert!(screen_contains(&screen, &format!("Sunny and warm{STREAM_CURSOR}")));
    assert!(screen_contains(&screen, "What is the weather?"));

    h.feed(FeedEvent::SetStatus(ConnectionStatus::Ready));
    let screen = h.draw();
    assert!(screen_contains(&screen, "Sunny and warm"));
    assert!(!screen_contains(&screen, STREAM_CURSOR));
    assert!(screen_contains(&screen, "upvote"));
    assert!(h.app.viewport.has_sent_message());
    assert!(h.app.viewport.at_bottom());
}

#[test]
fn empty_streaming_reply_shows_spinner_in_turn() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Append(user("m1", "hi")));
    h.feed(FeedEvent::SetStatus(ConnectionStatus::Streaming));
    h.feed(FeedEvent::Append(Message::assistant("m2", Vec::new())));
    let screen = h.draw();
    assert!(screen_contains(&screen, "Thinking..."));
}

#[test]
fn responded_approval_suppresses_thinking() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(vec![user("m1", "weather?"), approval(ToolState::ApprovalResponded)]));
    h.feed(FeedEvent::SetStatus(ConnectionStatus::Submitted));
    let screen = h.draw();
    assert!(screen_contains(&screen, "getWeather"));
    assert!(!screen_contains(&screen, "Thinking..."));
}

#[test]
fn pending_approval_still_shows_thinking() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(vec![user("m1", "weather?"), approval(ToolState::ApprovalRequested)]));
    h.feed(FeedEvent::SetStatus(ConnectionStatus::Submitted));
    let screen = h.draw();
    assert!(screen_contains(&screen, "Thinking..."));
}

#[test]
fn readonly_hides_message_actions() {
    let mut h = Harness::readonly();
    h.feed(FeedEvent::Reset(conversation(1)));
    let screen = h.draw();
    assert!(screen_contains(&screen, "answer number 0"));
    assert!(!screen_contains(&screen, "upvote"));
    assert!(screen_contains(&screen, "read-only"));
}

#[test]
fn votes_mark_matching_turn() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(conversation(1)));
    h.feed(FeedEvent::SetVotes(vec![
        Vote { message_id: MessageId::from("a0"), is_upvoted: true },
        Vote { message_id: MessageId::from("a0"), is_upvoted: false },
    ]));
    let screen = h.draw();
    assert!(screen_contains(&screen, "Assistant \u{25b2}"));
    assert!(!screen_contains(&screen, "Assistant \u{25bc}"));
}

#[test]
fn bottom_padding_appears_after_first_send() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(conversation(1)));
    h.draw();
    let plain = h.app.viewport.anchor().geometry().content_height;

    h.feed(FeedEvent::SetStatus(ConnectionStatus::Submitted));
    h.feed(FeedEvent::SetStatus(ConnectionStatus::Ready));
    h.draw();
    let padded = h.app.viewport.anchor().geometry().content_height;
    assert_eq!(padded, plain + h.app.viewport.config().bottom_padding);
}

#[test]
fn footer_reports_status() {
    let mut h = Harness::new();
    let screen = h.draw();
    assert!(screen[screen.len() - 1].contains("[ready]"));

    h.feed(FeedEvent::SetStatus(ConnectionStatus::Error));
    let screen = h.draw();
    assert!(screen[screen.len() - 1].contains("[error]"));
}
