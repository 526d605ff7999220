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

use super::overlap::{LayoutSnapshot, OverlapDetector, VisibilitySink};
use super::scroll::{ScrollAnchor, ScrollMode};
use crate::Cli;
use crate::transcript::ConnectionStatus;
use ratatui::layout::Rect;

/// Tunables for the transcript viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportConfig {
    /// Rows from the end that still count as "at bottom".
    pub at_bottom_tolerance: usize,
    /// Rows per mouse wheel notch.
    pub scroll_lines: usize,
    /// Blank rows reserved under the newest turn once a message was sent.
    pub bottom_padding: usize,
    pub show_logo: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { at_bottom_tolerance: 1, scroll_lines: 3, bottom_padding: 4, show_logo: true }
    }
}

impl From<&Cli> for ViewportConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            at_bottom_tolerance: cli.tolerance,
            scroll_lines: cli.scroll_lines.max(1),
            bottom_padding: cli.bottom_padding,
            show_logo: !cli.no_logo,
        }
    }
}

/// Scroll anchoring, logo overlap, and the jump affordance for one mounted
/// transcript view.
///
/// Events only mutate state and mark the overlap detector dirty; geometry is
/// read back in the layout pass (`apply_layout` then `record_geometry`), after
/// the new content has been measured. Before the first layout and after
/// `unmount` every event handler is a no-op.
#[derive(Debug)]
pub struct TranscriptViewport {
    config: ViewportConfig,
    anchor: ScrollAnchor,
    detector: OverlapDetector,
    layout: LayoutSnapshot,
    /// Transcript body from the last layout pass.
    body: Option<Rect>,
    jump_button: Option<Rect>,
    mounted: bool,
    overlap_dirty: bool,
}

impl TranscriptViewport {
    pub fn mount(config: ViewportConfig, sink: Box<dyn VisibilitySink>) -> Self {
        tracing::debug!(?config, "transcript viewport mounted");
        Self {
            anchor: ScrollAnchor::new(config.at_bottom_tolerance),
            config,
            detector: OverlapDetector::new(sink),
            layout: LayoutSnapshot::default(),
            body: None,
            jump_button: None,
            mounted: true,
            overlap_dirty: true,
        }
    }

    /// Drop all view state. Later events are ignored until a new mount.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.body = None;
        self.jump_button = None;
        self.layout = LayoutSnapshot::default();
        self.anchor = ScrollAnchor::new(self.config.at_bottom_tolerance);
        self.detector.reset();
        tracing::debug!("transcript viewport unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn is_attached(&self) -> bool {
        self.mounted && self.body.is_some()
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn anchor(&self) -> &ScrollAnchor {
        &self.anchor
    }

    pub fn at_bottom(&self) -> bool {
        self.anchor.at_bottom()
    }

    pub fn has_sent_message(&self) -> bool {
        self.anchor.has_sent_message()
    }

    pub fn scroll_top(&self) -> usize {
        self.anchor.scroll_top()
    }

    pub fn logo_visible(&self) -> bool {
        self.detector.logo_visible()
    }

    pub fn body(&self) -> Option<Rect> {
        self.body
    }

    /// The jump-to-bottom affordance is shown whenever the view is not at bottom.
    pub fn jump_visible(&self) -> bool {
        !self.anchor.at_bottom()
    }

    pub fn jump_button(&self) -> Option<Rect> {
        self.jump_button
    }

    // -- events ---------------------------------------------------------------

    /// Manual scroll by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize) {
        if !self.is_attached() {
            return;
        }
        self.anchor.scroll_by(delta);
        self.overlap_dirty = true;
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_by(-isize::try_from(rows).unwrap_or(isize::MAX));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_by(isize::try_from(rows).unwrap_or(isize::MAX));
    }

    /// One viewport height, for page keys.
    pub fn page_rows(&self) -> usize {
        self.body.map_or(1, |b| usize::from(b.height).saturating_sub(1).max(1))
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_up(self.anchor.scroll_top());
    }

    /// The message sequence changed length or the last message changed.
    pub fn on_content_changed(&mut self) {
        if !self.mounted {
            return;
        }
        self.anchor.on_content_grew();
        self.overlap_dirty = true;
    }

    pub fn on_status(&mut self, status: ConnectionStatus) {
        if !self.mounted {
            return;
        }
        self.anchor.note_status(status);
    }

    pub fn on_resize(&mut self) {
        self.overlap_dirty = true;
    }

    pub fn scroll_to_bottom(&mut self, mode: ScrollMode) {
        if !self.is_attached() {
            return;
        }
        self.anchor.scroll_to_bottom(mode);
        self.overlap_dirty = true;
    }

    /// Activate the jump affordance. Returns false when it is not shown.
    pub fn jump_to_bottom(&mut self) -> bool {
        if !self.is_attached() || !self.jump_visible() {
            return false;
        }
        self.scroll_to_bottom(ScrollMode::Smooth);
        true
    }

    /// Whether the screen cell `(column, row)` lies on the jump affordance.
    pub fn hits_jump_button(&self, column: u16, row: u16) -> bool {
        self.jump_visible()
            && self.jump_button.is_some_and(|r| {
                column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
            })
    }

    /// Advance any smooth scroll by one frame.
    pub fn tick(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let animating = self.anchor.is_animating();
        if animating {
            self.anchor.tick();
            self.overlap_dirty = true;
        }
        animating
    }

    // -- layout pass ------------------------------------------------------------

    /// Feed the measured content height for `body`. Returns the scroll offset
    /// to paint with.
    pub fn apply_layout(&mut self, body: Rect, content_height: usize) -> usize {
        if !self.mounted {
            return 0;
        }
        if self.body != Some(body) {
            self.overlap_dirty = true;
        }
        self.body = Some(body);
        self.anchor.apply_layout(content_height, usize::from(body.height));
        self.anchor.scroll_top()
    }

    /// Store the geometry of the painted frame and rerun the overlap test if
    /// anything that can move a message happened since the last one.
    pub fn record_geometry(&mut self, layout: LayoutSnapshot, jump_button: Option<Rect>) -> bool {
        if !self.mounted {
            return self.detector.logo_visible();
        }
        self.jump_button = jump_button;
        if self.overlap_dirty || layout != self.layout {
            self.layout = layout;
            self.overlap_dirty = false;
            self.detector.recompute(&self.layout)
        } else {
            self.detector.logo_visible()
        }
    }
}
