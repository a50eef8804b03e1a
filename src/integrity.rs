//! Referential integrity of the clean tables.
//!
//! Cleaning never drops rows, so a foreign key from the dump that points at a
//! row missing from its target table survives into the output. A loader with
//! foreign-key constraints would reject those rows; this report lists them up
//! front.

use crate::clean::CleanTables;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::warn;

/// How many distinct dangling ids each finding keeps as examples.
const SAMPLE_SIZE: usize = 5;

/// References from one table column to a target table that did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub table: &'static str,
    pub column: &'static str,
    pub target: &'static str,
    /// Number of referencing values with no target row
    pub count: usize,
    /// Smallest few distinct unresolved ids
    pub sample: Vec<i64>,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}: {} dangling (e.g. {:?})",
            self.table, self.column, self.target, self.count, self.sample
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub dangling: Vec<DanglingReference>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty()
    }

    pub fn total_dangling(&self) -> usize {
        self.dangling.iter().map(|d| d.count).sum()
    }

    fn check<I>(
        &mut self,
        table: &'static str,
        column: &'static str,
        target: &'static str,
        known: &HashSet<i64>,
        refs: I,
    ) where
        I: IntoIterator<Item = i64>,
    {
        let mut count = 0;
        let mut missing = BTreeSet::new();
        for id in refs {
            if !known.contains(&id) {
                count += 1;
                missing.insert(id);
            }
        }

        if count > 0 {
            let finding = DanglingReference {
                table,
                column,
                target,
                count,
                sample: missing.into_iter().take(SAMPLE_SIZE).collect(),
            };
            warn!("{}", finding);
            self.dangling.push(finding);
        }
    }
}

/// Check every foreign key among the clean tables.
pub fn check_references(tables: &CleanTables) -> IntegrityReport {
    let stations: HashSet<i64> = tables.stations.iter().map(|s| s.id).collect();
    let classes: HashSet<i64> = tables.classes.iter().map(|c| c.id).collect();
    let routes: HashSet<i64> = tables.routes.iter().map(|r| r.id).collect();
    let trains: HashSet<i64> = tables.trains.iter().map(|t| t.id).collect();
    let profiles: HashSet<i64> = tables.pricing_profiles.iter().map(|p| p.id).collect();

    let mut report = IntegrityReport::default();

    report.check(
        "route_stops",
        "station_id",
        "stations",
        &stations,
        tables.route_stops.iter().map(|s| s.station_id),
    );
    report.check(
        "trains",
        "class_id",
        "classes",
        &classes,
        tables.trains.iter().filter_map(|t| t.class_id),
    );
    report.check(
        "trains",
        "route_id",
        "routes",
        &routes,
        tables.trains.iter().filter_map(|t| t.route_id),
    );
    report.check(
        "trains",
        "profile_ids",
        "pricing_profiles",
        &profiles,
        tables.trains.iter().flat_map(|t| t.profile_ids.iter().copied()),
    );
    report.check(
        "schedules",
        "train_id",
        "trains",
        &trains,
        tables.schedules.iter().map(|s| s.train_id),
    );
    report.check(
        "schedules",
        "station_id",
        "stations",
        &stations,
        tables.schedules.iter().map(|s| s.station_id),
    );
    report.check(
        "pricing_coefficients",
        "profile_id",
        "pricing_profiles",
        &profiles,
        tables.pricing_coefficients.iter().map(|c| c.profile_id),
    );
    report.check(
        "fares",
        "profile_id",
        "pricing_profiles",
        &profiles,
        tables.fares.iter().filter_map(|f| f.profile_id.as_i64()),
    );
    report.check(
        "fares",
        "from_station_id",
        "stations",
        &stations,
        tables.fares.iter().filter_map(|f| f.from_station_id.as_i64()),
    );
    report.check(
        "fares",
        "to_station_id",
        "stations",
        &stations,
        tables.fares.iter().filter_map(|f| f.to_station_id.as_i64()),
    );

    report
}
