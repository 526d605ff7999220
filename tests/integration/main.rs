// =====
// Integration tests: the transcript viewport driven end to end through the
// feed, terminal events, and a headless ratatui backend.
// =====

mod auto_follow;
mod helpers;
mod logo_overlap;
mod replay;
mod transcript_rendering;
