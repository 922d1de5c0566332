use crate::analytics::classify::classify;
use crate::analytics::extract::{extract_kill, extract_player_name};
use crate::analytics::types::{Analysis, EventKind, MatchState, Report, RunStats};
use tracing::{debug, warn};

/// Splits a stream of log lines into matches and folds events into them.
///
/// `current` is `None` while no match is open. Events seen outside a match
/// are dropped.
#[derive(Debug, Default)]
pub struct MatchSegmenter {
    current: Option<MatchState>,
    report: Report,
    stats: RunStats,
}

impl MatchSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_match_open(&self) -> bool {
        self.current.is_some()
    }

    /// Records closed so far.
    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn feed(&mut self, line: &str) {
        self.stats.lines += 1;

        match classify(line) {
            EventKind::MatchStart => self.on_match_start(),
            EventKind::MatchEnd => self.on_match_end(),
            EventKind::PlayerRegistered => self.on_player_registered(line),
            EventKind::KillRecorded => self.on_kill_recorded(line),
            EventKind::Unrecognized => {}
        }
    }

    /// Ends the run. An open match is dropped rather than flushed.
    pub fn finish(mut self) -> Analysis {
        if let Some(open) = self.current.take() {
            debug!(
                players = open.players.len(),
                total_kills = open.total_kills,
                "log ended inside a match, dropping it"
            );
            self.stats.discarded_open_match = true;
        }

        Analysis {
            report: self.report,
            stats: self.stats,
        }
    }

    fn on_match_start(&mut self) {
        if let Some(previous) = self.current.take() {
            if previous.players.is_empty() {
                debug!("dropping match without players");
                self.stats.empty_matches_discarded += 1;
            } else {
                self.close(previous);
            }
        }

        debug!(game = self.report.games.len() + 1, "match opened");
        self.current = Some(MatchState::default());
    }

    fn on_match_end(&mut self) {
        let Some(state) = self.current.take() else {
            return;
        };
        self.close(state);
    }

    fn on_player_registered(&mut self, line: &str) {
        let Some(state) = self.current.as_mut() else {
            return;
        };

        match extract_player_name(line) {
            Ok(name) => state.register_player(name),
            Err(err) => {
                self.stats.malformed_events += 1;
                warn!(error = %err, line, "skipping malformed player info event");
            }
        }
    }

    fn on_kill_recorded(&mut self, line: &str) {
        let Some(state) = self.current.as_mut() else {
            return;
        };

        match extract_kill(line) {
            Ok(kill) => state.record_kill(&kill),
            Err(err) => {
                self.stats.malformed_events += 1;
                warn!(error = %err, line, "skipping malformed kill event");
            }
        }
    }

    fn close(&mut self, state: MatchState) {
        let record = state.finalize();
        debug!(
            game = self.report.games.len() + 1,
            total_kills = record.total_kills,
            players = record.players.len(),
            "match closed"
        );
        self.report.games.push(record);
    }
}
