//! The run configuration record.
//!
//! A network description carries exactly three settings next to its lines:
//!
//! ```text
//! START=Blue Line:1
//! END=Green Line:7
//! TRAINS=4
//! ```
//!
//! `START` and `END` are station identifiers resolved later by the network
//! graph (station name, `line:index` label, or bare index).  Any other key is
//! rejected, as is a vehicle count below one.

use serde::Deserialize;

use crate::{CoreError, CoreResult};

/// Required vehicle count plus start and end identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct NetworkConfig {
    /// Number of vehicles to move from start to end.  Always ≥ 1.
    pub trains: u32,
    /// Identifier of the start station.
    pub start: String,
    /// Identifier of the end station.
    pub end: String,
}

impl NetworkConfig {
    pub fn new(trains: u32, start: impl Into<String>, end: impl Into<String>) -> CoreResult<Self> {
        Self { trains, start: start.into(), end: end.into() }.validated()
    }

    /// Assemble the record from raw `KEY=value` pairs in file order.
    ///
    /// Keys are matched case-sensitively against `TRAINS`, `START` and `END`;
    /// values are trimmed.
    pub fn from_entries<I, K, V>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut trains: Option<u32> = None;
        let mut start:  Option<String> = None;
        let mut end:    Option<String> = None;

        for (key, value) in entries {
            let key   = key.as_ref().trim();
            let value = value.as_ref().trim();
            match key {
                "TRAINS" => {
                    let n = value.parse::<u32>().map_err(|_| {
                        CoreError::Config(format!("TRAINS must be a positive integer, got {value:?}"))
                    })?;
                    set_once(&mut trains, n, "TRAINS")?;
                }
                "START" => set_once(&mut start, value.to_owned(), "START")?,
                "END"   => set_once(&mut end, value.to_owned(), "END")?,
                other   => return Err(CoreError::UnknownKey(other.to_owned())),
            }
        }

        Self {
            trains: trains.ok_or(CoreError::MissingKey("TRAINS"))?,
            start:  start.ok_or(CoreError::MissingKey("START"))?,
            end:    end.ok_or(CoreError::MissingKey("END"))?,
        }
        .validated()
    }

    /// Check the invariants serde cannot express.
    pub fn validated(self) -> CoreResult<Self> {
        if self.trains < 1 {
            return Err(CoreError::Config(format!(
                "TRAINS must be at least 1, got {}",
                self.trains
            )));
        }
        if self.start.is_empty() || self.end.is_empty() {
            return Err(CoreError::Config("START and END must not be empty".into()));
        }
        Ok(self)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &'static str) -> CoreResult<()> {
    if slot.is_some() {
        return Err(CoreError::DuplicateKey(key.to_owned()));
    }
    *slot = Some(value);
    Ok(())
}
