use crate::analytics::error::SourceError;
use crate::analytics::segmenter::MatchSegmenter;
use crate::analytics::types::Analysis;
use crate::conf::PipelineConfig;
use crate::source::open_lines;
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info};

/// Runs the segmenter over `lines`.
///
/// Lines are produced on a reader thread and pushed onto a bounded queue of
/// `queue_capacity` entries; the segmenter drains it on the calling thread.
/// Dropping the sender closes the queue, so the loop below ends once the
/// reader is done and everything it sent has been consumed.
///
/// A read error is fatal: the partial report is thrown away.
pub fn analyze_lines<I>(lines: I, config: &PipelineConfig) -> Result<Analysis, SourceError>
where
    I: IntoIterator<Item = io::Result<String>> + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<String>(config.queue_capacity);

    let reader_handle = thread::spawn(move || -> Result<u64, SourceError> {
        let mut read = 0;

        for line in lines {
            let line = line.map_err(|source| SourceError::Read {
                line: read + 1,
                source,
            })?;
            read += 1;

            // Receiver gone, nothing left to feed.
            if tx.send(line).is_err() {
                break;
            }
        }

        Ok(read)
    });

    let mut segmenter = MatchSegmenter::new();
    for line in rx {
        segmenter.feed(&line);
    }

    let read = reader_handle
        .join()
        .map_err(|_| SourceError::ReaderPanicked)??;
    debug!(lines = read, "log reader finished");

    let analysis = segmenter.finish();
    info!(
        lines = analysis.stats.lines,
        games = analysis.report.games.len(),
        malformed_events = analysis.stats.malformed_events,
        empty_matches_discarded = analysis.stats.empty_matches_discarded,
        discarded_open_match = analysis.stats.discarded_open_match,
        "log analyzed"
    );

    Ok(analysis)
}

pub fn analyze_file(path: &Path, config: &PipelineConfig) -> Result<Analysis, SourceError> {
    let lines = open_lines(path)?;
    analyze_lines(lines, config)
}
