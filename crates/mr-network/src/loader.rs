//! Text network loader.
//!
//! # File format
//!
//! One record per line; blank lines are ignored.
//!
//! ```text
//! #Blue Line
//! 1:Kashmere Gate
//! 2:Rajiv Chowk:Conn: Yellow Line
//! 3:Mandi House
//! #Yellow Line
//! 1:Rajiv Chowk:Conn: Blue Line
//! 2:Central Secretariat
//! START=Blue Line:1
//! END=Yellow Line:2
//! TRAINS=3
//! ```
//!
//! | Record                          | Meaning                                   |
//! |---------------------------------|-------------------------------------------|
//! | `#name`                         | start a new line                          |
//! | `index:name`                    | station at line-local `index`             |
//! | `index:name:Conn: other`        | crossing station shared with `other`      |
//! | `KEY=value`                     | `TRAINS`, `START` or `END`                |
//!
//! A line whose first and last stations share a name is circular.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use mr_core::{LineId, NetworkConfig};

use crate::{NetworkBuilder, NetworkError, NetworkGraph, NetworkResult};

const CONN_MARKER: &str = ":Conn:";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a network from a text file.
pub fn load_network(path: &Path) -> NetworkResult<NetworkGraph> {
    let file = File::open(path).map_err(NetworkError::Io)?;
    debug!(path = %path.display(), "loading network");
    load_network_reader(file)
}

/// Like [`load_network`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded descriptions.
pub fn load_network_reader<R: Read>(reader: R) -> NetworkResult<NetworkGraph> {
    let (builder, config) = parse_network(BufReader::new(reader))?;
    builder.build(&config)
}

/// Parse records into an unvalidated builder plus the configuration record.
pub fn parse_network<R: BufRead>(reader: R) -> NetworkResult<(NetworkBuilder, NetworkConfig)> {
    let mut builder = NetworkBuilder::new();
    let mut current: Option<LineId> = None;
    let mut entries: Vec<(String, String)> = Vec::new();

    for (n, raw) in reader.lines().enumerate() {
        let raw     = raw?;
        let line_no = n + 1;
        let record  = raw.trim();
        if record.is_empty() {
            continue;
        }

        if let Some(name) = record.strip_prefix('#') {
            if name.trim().is_empty() {
                return Err(parse_err(line_no, "line header without a name"));
            }
            current = Some(builder.add_line(name)?);
        } else if let Some((key, value)) = record.split_once('=') {
            entries.push((key.to_owned(), value.to_owned()));
        } else {
            let line = current.ok_or_else(|| parse_err(line_no, "station before any line header"))?;
            let (station, conn) = match record.split_once(CONN_MARKER) {
                Some((station, other)) => (station, Some(other.trim())),
                None                   => (record, None),
            };
            let (index, name) = parse_station(station, line_no)?;
            let id = builder.add_station(line, index, name)?;
            if let Some(other) = conn {
                if other.is_empty() {
                    return Err(parse_err(line_no, "crossing without a line name"));
                }
                builder.add_crossing(id, other);
            }
        }
    }

    let config = NetworkConfig::from_entries(entries)?;
    Ok((builder, config))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_station(record: &str, line_no: usize) -> NetworkResult<(u32, &str)> {
    let (index, name) = record
        .split_once(':')
        .ok_or_else(|| parse_err(line_no, format!("expected \"index:name\", got {record:?}")))?;
    let index = index
        .trim()
        .parse::<u32>()
        .map_err(|_| parse_err(line_no, format!("invalid station index {index:?}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(parse_err(line_no, "station without a name"));
    }
    Ok((index, name))
}

fn parse_err(line: usize, message: impl Into<String>) -> NetworkError {
    NetworkError::Parse { line, message: message.into() }
}
