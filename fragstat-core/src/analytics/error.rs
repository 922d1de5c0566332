use std::path::PathBuf;
use thiserror::Error;

/// Failure to pull a single event out of a classified line.
///
/// These are local to one line: the event is skipped and the run goes on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("player info line has no '\\' delimited name field")]
    MissingDelimiter,

    #[error("kill payload '{payload}' does not match '<killer> killed <killed> by <cause>'")]
    MalformedKill { payload: String },
}

/// Failure of the line source. Always fatal to the run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("log reader thread panicked")]
    ReaderPanicked,
}
