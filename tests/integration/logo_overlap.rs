// Background logo visibility: the overlap test runs after layout, hides the
// logo once a message covers it, and notifies only on change.

use chat_viewport::app::{App, FeedEvent, ViewportConfig, ViewportEvent};
use chat_viewport::transcript::Message;
use pretty_assertions::assert_eq;

use crate::helpers::{Harness, screen_contains, user};

const LOGO_FRAGMENT: &str = "_~^~^~_";

/// Messages wide enough to cross the center column.
fn wide_messages(count: usize) -> Vec<Message> {
    (0..count).map(|i| user(&format!("w{i}"), &"x".repeat(60))).collect()
}

#[test]
fn empty_transcript_shows_logo_and_reports_once() {
    let mut h = Harness::new();
    let screen = h.draw();
    assert!(screen_contains(&screen, LOGO_FRAGMENT));
    assert_eq!(h.drain_viewport_events(), vec![ViewportEvent::LogoVisibility(true)]);
    assert_eq!(h.app.logo_visible, Some(true));

    h.draw();
    h.draw();
    assert_eq!(h.drain_viewport_events(), vec![]);
}

#[test]
fn covering_messages_hide_the_logo() {
    let mut h = Harness::new();
    h.draw();
    h.drain_viewport_events();

    h.feed(FeedEvent::Reset(wide_messages(12)));
    let screen = h.draw();

    assert!(!screen_contains(&screen, LOGO_FRAGMENT));
    assert!(!h.app.viewport.logo_visible());
    assert_eq!(h.drain_viewport_events(), vec![ViewportEvent::LogoVisibility(false)]);
    assert_eq!(h.app.logo_visible, Some(false));
}

#[test]
fn scrolling_over_covered_logo_does_not_renotify() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(wide_messages(12)));
    h.draw();
    assert_eq!(h.drain_viewport_events(), vec![ViewportEvent::LogoVisibility(false)]);

    for _ in 0..3 {
        h.app.viewport.scroll_up(2);
        h.draw();
    }
    assert_eq!(h.drain_viewport_events(), vec![]);
}

#[test]
fn narrow_messages_leave_logo_visible() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Append(user("m1", "hi")));
    let screen = h.draw();
    assert!(h.app.viewport.logo_visible());
    assert!(screen_contains(&screen, LOGO_FRAGMENT));
    assert_eq!(h.drain_viewport_events(), vec![ViewportEvent::LogoVisibility(true)]);
}

#[test]
fn clearing_transcript_brings_logo_back() {
    let mut h = Harness::new();
    h.feed(FeedEvent::Reset(wide_messages(12)));
    h.draw();
    h.drain_viewport_events();

    h.feed(FeedEvent::Reset(Vec::new()));
    let screen = h.draw();
    assert!(screen_contains(&screen, LOGO_FRAGMENT));
    assert_eq!(h.drain_viewport_events(), vec![ViewportEvent::LogoVisibility(true)]);
}

#[test]
fn disabled_logo_never_notifies() {
    let config = ViewportConfig { show_logo: false, ..ViewportConfig::default() };
    let mut h = Harness::with_app(App::new(config, false));
    let screen = h.draw();
    h.feed(FeedEvent::Reset(wide_messages(12)));
    h.draw();

    assert!(!screen_contains(&screen, LOGO_FRAGMENT));
    assert_eq!(h.drain_viewport_events(), vec![]);
    assert_eq!(h.app.logo_visible, None);
}

#[test]
fn unmounted_viewport_stops_notifying() {
    let mut h = Harness::new();
    h.draw();
    h.drain_viewport_events();

    h.app.viewport.unmount();
    h.feed(FeedEvent::Reset(wide_messages(12)));
    h.draw();
    assert_eq!(h.drain_viewport_events(), vec![]);
}
