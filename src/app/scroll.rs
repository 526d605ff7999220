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

use crate::transcript::ConnectionStatus;

/// How `scroll_to_bottom` reaches the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Animate over a few frames (see `ScrollAnchor::tick`).
    Smooth,
    Instant,
}

/// Scroll container extents, in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollGeometry {
    pub scroll_top: usize,
    pub content_height: usize,
    pub viewport_height: usize,
}

impl ScrollGeometry {
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// True when the visible extent reaches the end of the content,
    /// within `tolerance` rows.
    #[must_use]
    pub fn is_at_bottom(&self, tolerance: usize) -> bool {
        self.scroll_top.saturating_add(self.viewport_height).saturating_add(tolerance)
            >= self.content_height
    }
}

/// Tracks whether the transcript is anchored to its newest content.
///
/// Content growth is a two-step protocol: `on_content_grew` samples the
/// anchor against the old geometry, then `apply_layout` runs once the new
/// content has been measured and re-scrolls if the anchor was held.
#[derive(Debug)]
pub struct ScrollAnchor {
    geometry: ScrollGeometry,
    /// Smooth scroll position (fractional) for animation.
    scroll_pos: f32,
    at_bottom: bool,
    has_sent_message: bool,
    /// Content grew while anchored; resolved by the next `apply_layout`.
    follow_pending: bool,
    /// A smooth `scroll_to_bottom` is in flight.
    animating: bool,
    tolerance: usize,
}

impl ScrollAnchor {
    pub fn new(tolerance: usize) -> Self {
        Self {
            geometry: ScrollGeometry::default(),
            scroll_pos: 0.0,
            at_bottom: true,
            has_sent_message: false,
            follow_pending: false,
            animating: false,
            tolerance,
        }
    }

    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    #[must_use]
    pub fn has_sent_message(&self) -> bool {
        self.has_sent_message
    }

    #[must_use]
    pub fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    #[must_use]
    pub fn scroll_top(&self) -> usize {
        self.geometry.scroll_top
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Recompute `at_bottom` from the current geometry.
    pub fn on_container_scroll(&mut self) -> bool {
        self.at_bottom = self.geometry.is_at_bottom(self.tolerance);
        self.at_bottom
    }

    /// Manual scroll by `delta` rows (negative = towards older content).
    pub fn scroll_by(&mut self, delta: isize) {
        self.animating = false;
        self.follow_pending = false;
        let max = self.geometry.max_scroll();
        let top = self.geometry.scroll_top.saturating_add_signed(delta).min(max);
        self.set_scroll_top(top);
        self.on_container_scroll();
    }

    /// The message sequence changed length or the last message changed.
    /// Must run before the new content is laid out.
    pub fn on_content_grew(&mut self) {
        if self.at_bottom || self.animating {
            self.follow_pending = true;
        } else {
            tracing::trace!(
                scroll_top = self.geometry.scroll_top,
                "content grew while scrolled up; keeping position"
            );
        }
    }

    /// Post-layout hook: record the measured extents and settle the scroll
    /// position against them.
    pub fn apply_layout(&mut self, content_height: usize, viewport_height: usize) {
        // `at_bottom` still reflects the geometry before this layout. An
        // unchanged layout never moves the view, so rows inside the tolerance
        // band stay reachable.
        let resized = content_height != self.geometry.content_height
            || viewport_height != self.geometry.viewport_height;
        let follow = self.follow_pending || (self.at_bottom && resized);
        self.follow_pending = false;
        self.geometry.content_height = content_height;
        self.geometry.viewport_height = viewport_height;

        let max = self.geometry.max_scroll();
        if follow && !self.animating {
            self.set_scroll_top(max);
        } else if self.geometry.scroll_top > max {
            self.set_scroll_top(max);
        }
        self.on_container_scroll();
    }

    pub fn scroll_to_bottom(&mut self, mode: ScrollMode) {
        self.follow_pending = false;
        match mode {
            ScrollMode::Instant => {
                self.animating = false;
                self.set_scroll_top(self.geometry.max_scroll());
                self.on_container_scroll();
            }
            ScrollMode::Smooth => {
                self.animating = true;
                self.tick();
            }
        }
        tracing::debug!(?mode, target = self.geometry.max_scroll(), "scroll to bottom");
    }

    /// Advance a smooth scroll by one frame. Returns whether it is still running.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        let max = self.geometry.max_scroll();
        let target = max as f32;
        let delta = target - self.scroll_pos;
        if delta.abs() < 0.01 {
            self.scroll_pos = target;
        } else {
            // Smooth over ~2-3 frames at 30fps.
            self.scroll_pos += delta * 0.5;
        }
        self.geometry.scroll_top = (self.scroll_pos.round().max(0.0) as usize).min(max);
        if self.geometry.scroll_top >= max {
            self.set_scroll_top(max);
            self.animating = false;
        }
        self.on_container_scroll();
        self.animating
    }

    /// Latch the sticky "a message was sent" flag.
    pub fn note_status(&mut self, status: ConnectionStatus) {
        if status == ConnectionStatus::Submitted && !self.has_sent_message {
            tracing::debug!("first message submitted; reserving bottom padding from now on");
            self.has_sent_message = true;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn set_scroll_top(&mut self, top: usize) {
        self.geometry.scroll_top = top;
        self.scroll_pos = top as f32;
    }
}
