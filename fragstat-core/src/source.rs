use crate::analytics::SourceError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a log file as a lazy sequence of lines.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the run;
/// server logs routinely carry player names in legacy encodings.
pub fn open_lines(
    path: &Path,
) -> Result<impl Iterator<Item = io::Result<String>> + Send + 'static, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(lossy_lines(BufReader::new(file)))
}

pub fn lossy_lines<R>(reader: R) -> impl Iterator<Item = io::Result<String>> + Send + 'static
where
    R: BufRead + Send + 'static,
{
    reader.split(b'\n').map(|line| {
        line.map(|bytes| {
            let text = String::from_utf8_lossy(&bytes);
            let text: &str = &text;
            text.strip_suffix('\r').unwrap_or(text).to_string()
        })
    })
}
