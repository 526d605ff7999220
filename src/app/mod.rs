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

mod events;
pub mod feed;
pub mod overlap;
pub mod plan;
pub mod replay;
pub mod scroll;
mod state;
mod terminal;
pub mod viewport;

pub use events::{handle_terminal_event, handle_viewport_event};
pub use feed::{FeedEvent, handle_feed_event};
pub use overlap::{
    ChannelSink, LayoutSnapshot, NullSink, OverlapDetector, ViewportEvent, VisibilitySink,
    any_overlap, rects_overlap,
};
pub use plan::{PlanInput, Placeholder, TranscriptPlan, TurnDescriptor, plan_transcript};
pub use scroll::{ScrollAnchor, ScrollGeometry, ScrollMode};
pub use state::App;
pub use terminal::TerminalGuard;
pub use viewport::{TranscriptViewport, ViewportConfig};

use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

/// Paces animation and spinner frames. Input bursts (mouse motion) still
/// redraw, but never advance a frame early.
#[derive(Debug)]
struct FrameClock {
    interval: Duration,
    last: Instant,
}

impl FrameClock {
    fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last: now }
    }

    fn until_next(&self, now: Instant) -> Duration {
        self.interval.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// True at most once per interval.
    fn advance(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }
        self.last = now;
        true
    }
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::acquire()?;

    let mut events = EventStream::new();
    let mut frames = FrameClock::new(Duration::from_millis(16), Instant::now());

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = frames.until_next(Instant::now());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                handle_terminal_event(app, event);
            }
            Some(event) = app.feed_rx.recv() => {
                handle_feed_event(app, event);
            }
            Some(event) = app.viewport_rx.recv() => {
                handle_viewport_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Try terminal events first (keeps scrolling responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                handle_terminal_event(app, event);
                continue;
            }
            if let Ok(event) = app.feed_rx.try_recv() {
                handle_feed_event(app, event);
                continue;
            }
            match app.viewport_rx.try_recv() {
                Ok(event) => handle_viewport_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once. Layout, anchoring and the overlap test all run
        // inside the draw so they read the geometry of this frame.
        if frames.advance(Instant::now()) {
            if app.is_busy() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            app.viewport.tick();
        }
        guard.terminal().draw(|f| crate::ui::render(f, app))?;
    }

    app.viewport.unmount();
    // Guard drop restores the terminal.
    Ok(())
}
