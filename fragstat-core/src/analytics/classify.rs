use crate::analytics::constants::{
    KILL_MARKER, MATCH_END_MARKER, MATCH_START_MARKER, PLAYER_INFO_MARKER,
};
use crate::analytics::types::EventKind;

/// Assigns exactly one [`EventKind`] to a raw log line.
///
/// Player info is checked before kills so that a display name containing
/// `Kill` never turns a userinfo line into a kill event.
pub fn classify(line: &str) -> EventKind {
    if line.contains(MATCH_START_MARKER) {
        EventKind::MatchStart
    } else if line.contains(MATCH_END_MARKER) {
        EventKind::MatchEnd
    } else if line.contains(PLAYER_INFO_MARKER) {
        EventKind::PlayerRegistered
    } else if line.contains(KILL_MARKER) {
        EventKind::KillRecorded
    } else {
        EventKind::Unrecognized
    }
}
