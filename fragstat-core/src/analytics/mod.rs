//! Match Analytics Pipeline
//!
//! This module turns a game server log into per-match statistics.
//!
//! A server log is one long stream of lines. Somewhere in that stream a match
//! starts (`InitGame`), players show up (`ClientUserinfoChanged`), people die
//! (`Kill`) and eventually the match shuts down (`ShutdownGame`). Everything
//! else (items, chat, connects) is noise and is skipped.
//!
//! Lines are read on a dedicated thread and handed to the segmenter through a
//! bounded queue. The segmenter is the only stateful piece: it keeps the match
//! that is currently open, folds every recognized event into it, and closes it
//! into an immutable [`MatchRecord`] when a boundary is reached.
//!
//! A match that is still open when the log runs out is dropped, not flushed.
//! Only a `ShutdownGame` line (or the next `InitGame`) produces a record.
//!
//! The overall data processing architecture is:
//!
//! line source
//! sync_channel (bounded)
//! classify
//! extract_player_name / extract_kill
//! MatchState
//! MatchRecord
//! Report
//! render
//!

mod classify;
mod constants;
mod error;
mod extract;
mod fold;
mod pipeline;
mod ranking;
mod render;
mod segmenter;
mod types;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use constants::*;
pub use error::{ExtractError, SourceError};
pub use extract::{extract_kill, extract_player_name};
pub use pipeline::{analyze_file, analyze_lines};
pub use ranking::rank;
pub use render::{render, render_json, render_pretty, render_text};
pub use segmenter::MatchSegmenter;
pub use types::*;
