use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a cleaning run.
///
/// None of these are recovered from: the run is a one-shot batch job and is
/// expected to be re-run from scratch after a failure.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The dump could not be opened or read.
    #[error("Failed to read dump {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dump is not valid JSON.
    #[error("Failed to parse dump {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The dump parsed, but its top level is not a table-name mapping.
    #[error("Dump top level must be an object of tables")]
    NotAnObject,

    /// An expected table key is absent or does not hold a sequence of rows.
    #[error("Missing table '{0}' in dump")]
    MissingTable(String),

    /// A row lacks an expected field or holds a value of the wrong type.
    #[error("Malformed row {index} in table '{table}': {message}")]
    MalformedRow {
        table: String,
        index: usize,
        message: String,
    },

    #[error("Invalid profile id '{token}' on travel {travel_id}")]
    InvalidProfileId { travel_id: i64, token: String },

    #[error("Invalid rounding value {value} on profile {profile_id}")]
    InvalidRounding { profile_id: i64, value: String },

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize table: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type CleanResult<T> = Result<T, CleanError>;
