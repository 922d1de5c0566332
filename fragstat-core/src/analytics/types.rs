use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    MatchStart,
    MatchEnd,
    PlayerRegistered,
    KillRecorded,
    Unrecognized,
}

/// Parties of a single kill, borrowed from the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent<'a> {
    pub killer: &'a str,
    pub killed: &'a str,
    pub cause: &'a str,
}

/// Running aggregate of the match that is currently open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    pub total_kills: u64,
    /// Registered players in first-seen order.
    pub players: Vec<String>,
    pub kills: HashMap<String, u64>,
    pub kills_by_means: HashMap<String, u64>,
}

/// Immutable snapshot of a closed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub total_kills: u64,
    pub players: Vec<String>,
    pub kills: HashMap<String, u64>,
    pub kills_by_means: HashMap<String, u64>,
    /// `name:count` entries, highest score first. Equal scores have no defined order.
    pub ranking: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub games: Vec<MatchRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: u64,
    pub malformed_events: u64,
    pub empty_matches_discarded: u64,
    /// A match was still open when the source ran dry and was dropped.
    pub discarded_open_match: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub report: Report,
    pub stats: RunStats,
}
