//! Orchestration: load the dump, clean and write each table in turn, then
//! summarize.

use crate::clean::{
    clean_classes, clean_fares, clean_pricing_coefficients, clean_pricing_profiles, clean_routes,
    clean_schedules, clean_stations, clean_trains, CleanTables,
};
use crate::config::{
    CleanConfig, CLASSES_FILE, FARES_FILE, PRICING_COEFFICIENTS_FILE, PRICING_PROFILES_FILE,
    ROUTES_FILE, ROUTE_STOPS_FILE, SCHEDULES_FILE, STATIONS_FILE, TRAINS_FILE,
};
use crate::dump::{
    Dump, CLASSES, PROFILES, PROFILES_COEFFS, SECTIONS, SPREAD_SHEET, STATIONS, TRAVELS,
    TRAVELS_DATA,
};
use crate::error::CleanResult;
use crate::integrity::{check_references, IntegrityReport};
use crate::writer::TableWriter;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Number of files a run writes.
pub const OUTPUT_FILE_COUNT: usize = 9;

/// Record counts and findings of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub output_dir: PathBuf,
    pub stations: usize,
    pub active_stations: usize,
    pub classes: usize,
    pub routes: usize,
    pub route_stops: usize,
    pub trains: usize,
    pub schedules: usize,
    pub pricing_profiles: usize,
    pub pricing_coefficients: usize,
    pub fares: usize,
    pub integrity: IntegrityReport,
}

impl Summary {
    pub fn new(output_dir: PathBuf, tables: &CleanTables, integrity: IntegrityReport) -> Self {
        Summary {
            output_dir,
            stations: tables.stations.len(),
            active_stations: tables.stations.iter().filter(|s| s.is_active).count(),
            classes: tables.classes.len(),
            routes: tables.routes.len(),
            route_stops: tables.route_stops.len(),
            trains: tables.trains.len(),
            schedules: tables.schedules.len(),
            pricing_profiles: tables.pricing_profiles.len(),
            pricing_coefficients: tables.pricing_coefficients.len(),
            fares: tables.fares.len(),
            integrity,
        }
    }

    pub fn total(&self) -> usize {
        self.stations
            + self.classes
            + self.routes
            + self.route_stops
            + self.trains
            + self.schedules
            + self.pricing_profiles
            + self.pricing_coefficients
            + self.fares
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✅ Done! {} total records across {} files in {}/",
            self.total(),
            OUTPUT_FILE_COUNT,
            self.output_dir.display()
        )?;
        writeln!(f)?;
        writeln!(f, "📊 Summary:")?;
        writeln!(f, "   Stations:    {} ({} active)", self.stations, self.active_stations)?;
        writeln!(f, "   Classes:     {}", self.classes)?;
        writeln!(f, "   Routes:      {}", self.routes)?;
        writeln!(f, "   Route Stops: {}", self.route_stops)?;
        writeln!(f, "   Trains:      {}", self.trains)?;
        writeln!(f, "   Schedules:   {}", self.schedules)?;
        writeln!(f, "   Profiles:    {}", self.pricing_profiles)?;
        writeln!(f, "   Coefficients:{}", self.pricing_coefficients)?;
        write!(f, "   Fares:       {}", self.fares)?;

        if !self.integrity.is_clean() {
            writeln!(f)?;
            writeln!(f)?;
            write!(
                f,
                "⚠ {} dangling references:",
                self.integrity.total_dangling()
            )?;
            for finding in &self.integrity.dangling {
                write!(f, "\n   {}", finding)?;
            }
        }
        Ok(())
    }
}

/// Clean every table of `dump`, writing each one as soon as it is ready.
pub fn clean_dump(dump: &Dump, writer: &TableWriter) -> CleanResult<CleanTables> {
    info!("cleaning data");
    let mut tables = CleanTables::default();

    tables.stations = clean_stations(dump.table(STATIONS)?);
    writer.write_table(STATIONS_FILE, &tables.stations)?;

    tables.classes = clean_classes(dump.table(CLASSES)?);
    writer.write_table(CLASSES_FILE, &tables.classes)?;

    let (routes, route_stops) = clean_routes(dump.table(SECTIONS)?);
    tables.routes = routes;
    tables.route_stops = route_stops;
    writer.write_table(ROUTES_FILE, &tables.routes)?;
    writer.write_table(ROUTE_STOPS_FILE, &tables.route_stops)?;

    tables.trains = clean_trains(dump.table(TRAVELS)?)?;
    writer.write_table(TRAINS_FILE, &tables.trains)?;

    tables.schedules = clean_schedules(dump.table(TRAVELS_DATA)?);
    writer.write_table(SCHEDULES_FILE, &tables.schedules)?;

    tables.pricing_profiles = clean_pricing_profiles(dump.table(PROFILES)?)?;
    writer.write_table(PRICING_PROFILES_FILE, &tables.pricing_profiles)?;

    tables.pricing_coefficients = clean_pricing_coefficients(dump.table(PROFILES_COEFFS)?);
    writer.write_table(PRICING_COEFFICIENTS_FILE, &tables.pricing_coefficients)?;

    tables.fares = clean_fares(dump.table(SPREAD_SHEET)?);
    writer.write_table(FARES_FILE, &tables.fares)?;

    Ok(tables)
}

/// Run the whole pipeline described by `config`.
pub fn run(config: &CleanConfig) -> CleanResult<Summary> {
    let writer = TableWriter::new_file_writer(&config.output_dir, config.indent)?;

    let dump = Dump::load(&config.dump_path)?;
    debug!(tables = ?dump.table_names().collect::<Vec<_>>(), "dump loaded");

    let tables = clean_dump(&dump, &writer)?;
    let integrity = check_references(&tables);

    Ok(Summary::new(config.output_dir.clone(), &tables, integrity))
}
