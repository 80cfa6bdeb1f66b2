use std::io::Write;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinesError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Path that stands for standard output
pub const STDOUT_PATH: &str = "-";

/// Read a UTF-8 file as one string per line.
///
/// `\n`, `\r\n` and a lone `\r` all end a row. A trailing line ending does
/// not add an empty row.
///
/// # Errors
///
/// Returns `LinesError::Io` if the file cannot be read or is not valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LinesError> {
    let content = std::fs::read_to_string(path).map_err(|source| LinesError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(split_lines(&content))
}

/// Split text into rows the way [`read_lines`] does.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(&['\r', '\n'][..]) else {
            rows.push(rest.to_string());
            break;
        };
        rows.push(rest[..end].to_string());
        let ending = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + ending..];
    }
    rows
}

/// Write rendered output to `path`, or to stdout when `path` is `-`.
///
/// # Errors
///
/// Returns `LinesError::Io` if the destination cannot be written.
pub fn write_output(path: &Path, content: &str) -> Result<(), LinesError> {
    let io_error = |source| LinesError::Io {
        path: path.display().to_string(),
        source,
    };

    if path.as_os_str() == STDOUT_PATH {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes()).map_err(io_error)?;
        handle.flush().map_err(io_error)
    } else {
        std::fs::write(path, content).map_err(io_error)
    }
}
