//! # Railclean - Rail Network Dump Cleaner
//!
//! Turns a raw relational dump of a rail network (stations, train classes,
//! sections, travels, schedules, pricing) into one clean JSON file per
//! destination table, ready to be loaded into a fresh database.
//!
//! ## Modules
//!
//! - **dump**: Load the raw dump and pull typed rows out of its tables
//! - **clean**: One transformer per table, plus the minutes-to-time formatter
//! - **writer**: Pretty-printed JSON output, one file per table
//! - **integrity**: Report foreign keys that point at missing rows
//! - **pipeline**: Load, clean, write and summarize in a fixed order
//!
//! ## Quick Start
//!
//! ```rust
//! use railclean::clean::{clean_routes, types::RawSection};
//! use serde_json::json;
//!
//! let sections: Vec<RawSection> = serde_json::from_value(json!([
//!     {"id": 2, "sectionid": 7, "stationid": 11, "dist": 12},
//!     {"id": 1, "sectionid": 7, "stationid": 10, "dist": 0}
//! ]))
//! .unwrap();
//!
//! let (routes, stops) = clean_routes(sections);
//! assert_eq!(routes.len(), 1);
//! assert_eq!(stops[0].station_id, 10);
//! assert_eq!(stops[0].stop_order, 1);
//! ```

pub mod clean;
pub mod config;
pub mod dump;
pub mod error;
pub mod integrity;
pub mod pipeline;
pub mod writer;

// Re-export commonly used types for convenience
pub use clean::CleanTables;
pub use config::CleanConfig;
pub use dump::Dump;
pub use error::{CleanError, CleanResult};
pub use integrity::{check_references, IntegrityReport};
pub use pipeline::{clean_dump, run, Summary};
pub use writer::TableWriter;
