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

use ratatui::layout::Rect;
use tokio::sync::mpsc;

/// Notifications produced by the viewport for whoever hosts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    LogoVisibility(bool),
}

/// Receives background-logo visibility changes.
pub trait VisibilitySink {
    fn visibility_changed(&mut self, visible: bool);
}

impl<F> VisibilitySink for F
where
    F: FnMut(bool),
{
    fn visibility_changed(&mut self, visible: bool) {
        self(visible);
    }
}

/// Forwards notifications into the app event loop.
pub struct ChannelSink(pub mpsc::UnboundedSender<ViewportEvent>);

impl VisibilitySink for ChannelSink {
    fn visibility_changed(&mut self, visible: bool) {
        if self.0.send(ViewportEvent::LogoVisibility(visible)).is_err() {
            tracing::debug!(visible, "visibility receiver dropped");
        }
    }
}

/// Discards every notification.
pub struct NullSink;

impl VisibilitySink for NullSink {
    fn visibility_changed(&mut self, _visible: bool) {}
}

/// Geometry read back from the last layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSnapshot {
    /// Screen area of the decorative logo, `None` when it is not laid out.
    pub anchor: Option<Rect>,
    /// Screen area of every rendered message, clipped to the body.
    pub message_rects: Vec<Rect>,
}

/// Axis-aligned intersection on cell-inclusive bounds: rectangles that share
/// an edge row or column overlap. Empty rectangles never overlap anything.
#[must_use]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let (a_right, a_bottom) = (a.right() - 1, a.bottom() - 1);
    let (b_right, b_bottom) = (b.right() - 1, b.bottom() - 1);
    !(b_right < a.x || b.x > a_right || b_bottom < a.y || b.y > a_bottom)
}

/// True when at least one of `rects` overlaps `anchor`.
pub fn any_overlap<'a>(anchor: Rect, rects: impl IntoIterator<Item = &'a Rect>) -> bool {
    rects.into_iter().any(|rect| rects_overlap(anchor, *rect))
}

/// Derives the background logo's visibility from message geometry and
/// forwards changes to an injected sink.
pub struct OverlapDetector {
    logo_visible: bool,
    last_emitted: Option<bool>,
    sink: Box<dyn VisibilitySink>,
}

impl OverlapDetector {
    pub fn new(sink: Box<dyn VisibilitySink>) -> Self {
        Self { logo_visible: true, last_emitted: None, sink }
    }

    #[must_use]
    pub fn logo_visible(&self) -> bool {
        self.logo_visible
    }

    /// Recompute visibility from `layout`. Without an anchor rectangle there
    /// is nothing to test and the previous value stands.
    pub fn recompute(&mut self, layout: &LayoutSnapshot) -> bool {
        let Some(anchor) = layout.anchor else {
            return self.logo_visible;
        };
        self.logo_visible = !any_overlap(anchor, &layout.message_rects);
        if self.last_emitted != Some(self.logo_visible) {
            tracing::info!(visible = self.logo_visible, "logo visibility changed");
            self.last_emitted = Some(self.logo_visible);
            self.sink.visibility_changed(self.logo_visible);
        }
        self.logo_visible
    }

    /// Forget the emitted value so the next recompute notifies again.
    pub fn reset(&mut self) {
        self.logo_visible = true;
        self.last_emitted = None;
    }
}

impl std::fmt::Debug for OverlapDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlapDetector")
            .field("logo_visible", &self.logo_visible)
            .field("last_emitted", &self.last_emitted)
            .finish_non_exhaustive()
    }
}
