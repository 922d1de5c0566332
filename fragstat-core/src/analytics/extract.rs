use crate::analytics::constants::{
    BY_DELIMITER, KILL_PAYLOAD_DELIMITER, KILLED_DELIMITER, USERINFO_DELIMITER,
};
use crate::analytics::error::ExtractError;
use crate::analytics::types::KillEvent;

/// Pulls the display name out of a `ClientUserinfoChanged` line.
///
/// The userinfo payload is `\`-delimited and the name is the field right
/// after the first delimiter:
///
/// ```text
/// 20:38 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\uriel/zael...
/// ```
pub fn extract_player_name(line: &str) -> Result<&str, ExtractError> {
    line.split(USERINFO_DELIMITER)
        .nth(1)
        .ok_or(ExtractError::MissingDelimiter)
}

/// Pulls killer, victim and cause out of a `Kill` line.
///
/// Only the text after the last `:` is considered. Delimiter words are
/// matched left to right, so names such as `Kill` or `killed` still split
/// at the first ` killed ` and the first ` by ` that follows it.
pub fn extract_kill(line: &str) -> Result<KillEvent<'_>, ExtractError> {
    let payload = line
        .rsplit_once(KILL_PAYLOAD_DELIMITER)
        .map_or(line, |(_, tail)| tail)
        .trim();

    let malformed = || ExtractError::MalformedKill {
        payload: payload.to_string(),
    };

    let (killer, rest) = payload.split_once(KILLED_DELIMITER).ok_or_else(malformed)?;
    let (killed, cause) = rest.split_once(BY_DELIMITER).ok_or_else(malformed)?;

    Ok(KillEvent {
        killer: killer.trim(),
        killed: killed.trim(),
        cause: cause.trim(),
    })
}
