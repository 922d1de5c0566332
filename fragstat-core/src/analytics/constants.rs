/// Marks the beginning of a match.
pub const MATCH_START_MARKER: &str = "InitGame";
/// Marks the end of a match.
pub const MATCH_END_MARKER: &str = "ShutdownGame";
/// Carries the player's userinfo, display name first.
pub const PLAYER_INFO_MARKER: &str = "ClientUserinfoChanged";
pub const KILL_MARKER: &str = "Kill";

/// Killer reported for environmental deaths (falling, hazards, ...).
pub const WORLD: &str = "<world>";

pub const USERINFO_DELIMITER: char = '\\';
pub const KILL_PAYLOAD_DELIMITER: char = ':';
pub const KILLED_DELIMITER: &str = " killed ";
pub const BY_DELIMITER: &str = " by ";

/// Joins a player name and a score inside a ranking entry.
pub const RANKING_SEPARATOR: &str = ":";

/// Matches the buffer of the original channel-based reader.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
