// Scroll anchoring through full render passes: follow while anchored, hold
// position while scrolled up, and the jump-to-bottom affordance.

use chat_viewport::app::FeedEvent;
use chat_viewport::ui::JUMP_LABEL;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use pretty_assertions::assert_eq;

use crate::helpers::{Harness, assistant, conversation, screen_contains, user};

fn long_transcript() -> Harness {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(conversation(10)));
    h.draw();
    h
}

#[test]
fn first_layout_starts_at_bottom() {
    let h = long_transcript();
    assert!(h.max_scroll() > 0);
    assert!(h.app.viewport.at_bottom());
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
}

#[test]
fn anchored_view_follows_new_messages() {
    let mut h = long_transcript();
    let before = h.max_scroll();

    h.feed(FeedEvent::Append(user("late", "the newest question")));
    let screen = h.draw();

    assert!(h.max_scroll() > before);
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
    assert!(h.app.viewport.at_bottom());
    assert!(screen_contains(&screen, "the newest question"));
    assert!(!screen_contains(&screen, JUMP_LABEL));
}

#[test]
fn scrolled_up_view_keeps_its_position() {
    let mut h = long_transcript();
    h.key(KeyCode::PageUp);
    let screen = h.draw();
    let top = h.app.viewport.scroll_top();
    assert!(top < h.max_scroll());
    assert!(screen_contains(&screen, JUMP_LABEL));

    h.feed(FeedEvent::Append(user("late", "the newest question")));
    let screen = h.draw();

    assert_eq!(h.app.viewport.scroll_top(), top);
    assert!(!h.app.viewport.at_bottom());
    assert!(!screen_contains(&screen, "the newest question"));
    assert!(screen_contains(&screen, JUMP_LABEL));
}

#[test]
fn streamed_growth_follows_last_message() {
    let mut h = long_transcript();
    h.feed(FeedEvent::Append(assistant("live", "first")));
    h.draw();
    for text in ["first line\nsecond line", "first line\nsecond line\nthird line"] {
        h.feed(FeedEvent::ReplaceLast(assistant("live", text)));
        h.draw();
        assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
    }
}

#[test]
fn wheel_scroll_beyond_tolerance_shows_jump_button() {
    let mut h = long_transcript();
    h.mouse(MouseEventKind::ScrollUp, 10, 10);
    let screen = h.draw();
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll() - 3);
    assert!(h.app.viewport.jump_visible());
    assert!(screen_contains(&screen, JUMP_LABEL));
}

#[test]
fn one_row_up_is_within_tolerance() {
    let mut h = long_transcript();
    h.key(KeyCode::Up);
    let screen = h.draw();
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll() - 1);
    assert!(h.app.viewport.at_bottom());
    assert!(!screen_contains(&screen, JUMP_LABEL));
}

#[test]
fn clicking_jump_button_returns_to_bottom() {
    let mut h = long_transcript();
    h.key(KeyCode::PageUp);
    h.draw();
    let button = h.app.viewport.jump_button().expect("jump button laid out");

    h.mouse(MouseEventKind::Down(MouseButton::Left), button.x + 1, button.y);
    assert!(h.app.viewport.anchor().is_animating());
    let screen = h.settle();

    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
    assert!(h.app.viewport.at_bottom());
    assert!(!screen_contains(&screen, JUMP_LABEL));
}

#[test]
fn clicking_elsewhere_does_not_jump() {
    let mut h = long_transcript();
    h.key(KeyCode::PageUp);
    h.draw();
    let top = h.app.viewport.scroll_top();

    h.mouse(MouseEventKind::Down(MouseButton::Left), 0, 0);
    h.settle();
    assert_eq!(h.app.viewport.scroll_top(), top);
}

#[test]
fn end_key_jumps_and_home_goes_to_top() {
    let mut h = long_transcript();
    h.key(KeyCode::Home);
    h.draw();
    assert_eq!(h.app.viewport.scroll_top(), 0);
    assert!(h.app.viewport.jump_visible());

    h.key(KeyCode::End);
    h.settle();
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
    assert!(!h.app.viewport.jump_visible());
}

#[test]
fn jump_while_anchored_is_a_no_op() {
    let mut h = long_transcript();
    h.key(KeyCode::End);
    assert!(!h.app.viewport.anchor().is_animating());
    assert!(!h.app.viewport.tick());
}

#[test]
fn manual_scroll_cancels_smooth_jump() {
    let mut h = long_transcript();
    h.key(KeyCode::Home);
    h.draw();
    h.key(KeyCode::End);
    h.key(KeyCode::Up);
    assert!(!h.app.viewport.anchor().is_animating());
    h.draw();
    assert!(h.app.viewport.scroll_top() < h.max_scroll());
}

#[test]
fn resize_keeps_anchored_view_at_bottom() {
    let mut h = long_transcript();
    h.resize(60, 16);
    h.draw();
    assert!(h.app.viewport.at_bottom());
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());

    h.resize(100, 40);
    h.draw();
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
}

#[test]
fn bottom_of_very_long_transcript_is_painted() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(vec![user("m1", &"x\n".repeat(70_000)), user("m2", "TAIL MARKER")]));
    let screen = h.draw();

    assert!(h.max_scroll() > usize::from(u16::MAX));
    assert_eq!(h.app.viewport.scroll_top(), h.max_scroll());
    assert!(screen_contains(&screen, "TAIL MARKER"));
}
