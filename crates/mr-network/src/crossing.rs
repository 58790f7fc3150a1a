//! Name-keyed registry of stations shared between lines.

use rustc_hash::FxHashMap;

/// Maps a station name to every line that has a station of that name.
///
/// Each new declaration puts its own line first, then the line it connects
/// to, then the lines already on record.  The neighbor rule walks member lines
/// in that order after the end station's line.
#[derive(Debug, Clone, Default)]
pub struct CrossingRegistry {
    entries: FxHashMap<String, Vec<String>>,
}

impl CrossingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a station called `name` on `own_line` connects to
    /// `other_line`.
    pub fn register(&mut self, name: &str, own_line: &str, other_line: &str) {
        let mut lines = vec![own_line.to_owned()];
        if other_line != own_line {
            lines.push(other_line.to_owned());
        }
        if let Some(previous) = self.entries.remove(name) {
            for line in previous {
                if !lines.contains(&line) {
                    lines.push(line);
                }
            }
        }
        self.entries.insert(name.to_owned(), lines);
    }

    /// Member lines of the crossing called `name`, or `None` if `name` is not
    /// a crossing.
    pub fn lines(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
