use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

/// Directory the tool was built from; all default paths hang off it.
static TOOL_DIR: Lazy<PathBuf> = Lazy::new(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

/// Name of the raw dump, which sits next to the tool directory.
pub const DUMP_FILE_NAME: &str = "tut_full_dump.json";

/// Output file names, in the order they are written.
pub const STATIONS_FILE: &str = "stations.json";
pub const CLASSES_FILE: &str = "classes.json";
pub const ROUTES_FILE: &str = "routes.json";
pub const ROUTE_STOPS_FILE: &str = "route_stops.json";
pub const TRAINS_FILE: &str = "trains.json";
pub const SCHEDULES_FILE: &str = "schedules.json";
pub const PRICING_PROFILES_FILE: &str = "pricing_profiles.json";
pub const PRICING_COEFFICIENTS_FILE: &str = "pricing_coefficients.json";
pub const FARES_FILE: &str = "fares.json";

/// Configuration for a cleaning run
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Path of the raw dump document
    pub dump_path: PathBuf,

    /// Directory receiving one JSON file per clean table
    pub output_dir: PathBuf,

    /// Spaces per indentation level in the written files
    pub indent: usize,
}

impl CleanConfig {
    pub fn new(dump_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        CleanConfig {
            dump_path: dump_path.into(),
            output_dir: output_dir.into(),
            ..CleanConfig::default()
        }
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        let tool_dir: &Path = &TOOL_DIR;
        CleanConfig {
            dump_path: tool_dir.join("..").join(DUMP_FILE_NAME),
            output_dir: tool_dir.join("output"),
            indent: 2,
        }
    }
}
