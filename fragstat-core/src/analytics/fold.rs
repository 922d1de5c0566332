use crate::analytics::constants::WORLD;
use crate::analytics::types::{KillEvent, MatchState};

impl MatchState {
    /// Adds a player the first time the name shows up. Repeats are ignored.
    pub fn register_player(&mut self, name: &str) {
        if self.kills.contains_key(name) {
            return;
        }
        self.players.push(name.to_string());
        self.kills.insert(name.to_string(), 0);
    }

    /// Folds one kill into the match.
    ///
    /// Every kill counts towards `total_kills` and its cause. A player kill
    /// (suicides included) credits the killer, creating the entry if the
    /// killer was never registered. A `<world>` kill takes one point from the
    /// victim, never going below zero and never creating an entry.
    pub fn record_kill(&mut self, kill: &KillEvent<'_>) {
        self.total_kills += 1;

        if kill.killer != WORLD {
            *self.kills.entry(kill.killer.to_string()).or_insert(0) += 1;
        } else if let Some(score) = self.kills.get_mut(kill.killed) {
            *score = score.saturating_sub(1);
        }

        *self
            .kills_by_means
            .entry(kill.cause.to_string())
            .or_insert(0) += 1;
    }
}
