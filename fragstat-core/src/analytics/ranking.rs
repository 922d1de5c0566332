use crate::analytics::constants::RANKING_SEPARATOR;
use crate::analytics::types::{MatchRecord, MatchState};
use std::collections::HashMap;

/// Renders scores as `name:count`, highest first.
///
/// The sort is stable over the map's iteration order, which is itself
/// unspecified, so players with equal scores come out in no particular order.
pub fn rank(kills: &HashMap<String, u64>) -> Vec<String> {
    let mut scores: Vec<(&String, &u64)> = kills.iter().collect();
    scores.sort_by(|a, b| b.1.cmp(a.1));

    scores
        .into_iter()
        .map(|(name, count)| format!("{name}{RANKING_SEPARATOR}{count}"))
        .collect()
}

impl MatchState {
    pub fn finalize(self) -> MatchRecord {
        let ranking = rank(&self.kills);

        MatchRecord {
            total_kills: self.total_kills,
            players: self.players,
            kills: self.kills,
            kills_by_means: self.kills_by_means,
            ranking,
        }
    }
}
