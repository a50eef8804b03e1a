//! Dump loading
//!
//! The raw dump is one JSON object mapping table names to arrays of row
//! objects. It is parsed once, up front, and kept untyped; each transformer
//! then pulls its own table out as typed rows. A malformed row therefore only
//! fails the run when its table is reached.

use crate::error::{CleanError, CleanResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

/// Top-level table keys the cleaner reads.
pub const STATIONS: &str = "stations";
pub const CLASSES: &str = "classes";
pub const SECTIONS: &str = "sections";
pub const TRAVELS: &str = "travels";
pub const TRAVELS_DATA: &str = "travelsdata";
pub const PROFILES: &str = "profiles";
pub const PROFILES_COEFFS: &str = "profiles_coeffs";
pub const SPREAD_SHEET: &str = "spread_sheet";

/// The parsed dump, read-only after load
#[derive(Debug, Clone)]
pub struct Dump {
    tables: Map<String, Value>,
}

impl Dump {
    /// Read and parse the dump at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> CleanResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading dump");

        let mut content = std::fs::read(path).map_err(|source| CleanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = content.len(), "dump read into memory");

        Self::from_slice(&mut content).map_err(|err| match err {
            CleanError::Parse { message, .. } => CleanError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse a dump from raw bytes. simd-json parses in place, so the buffer
    /// is clobbered.
    pub fn from_slice(content: &mut [u8]) -> CleanResult<Self> {
        let value: Value =
            simd_json::serde::from_slice(content).map_err(|e| CleanError::Parse {
                path: Default::default(),
                message: e.to_string(),
            })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> CleanResult<Self> {
        match value {
            Value::Object(tables) => Ok(Dump { tables }),
            _ => Err(CleanError::NotAnObject),
        }
    }

    /// Raw rows of `table`.
    pub fn rows(&self, table: &str) -> CleanResult<&[Value]> {
        match self.tables.get(table) {
            Some(Value::Array(rows)) => Ok(rows.as_slice()),
            _ => Err(CleanError::MissingTable(table.to_string())),
        }
    }

    /// Rows of `table` deserialized as `T`, failing on the first bad row.
    pub fn table<T: DeserializeOwned>(&self, table: &str) -> CleanResult<Vec<T>> {
        self.rows(table)?
            .iter()
            .enumerate()
            .map(|(index, row)| {
                T::deserialize(row).map_err(|e| CleanError::MalformedRow {
                    table: table.to_string(),
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}
