//! Per-table cleaning
//!
//! Each transformer takes the typed rows of one dump table and returns the
//! clean records for one (or, for sections, two) output tables. They share no
//! state; synthetic id counters live inside the transformer that assigns them.

pub mod pricing;
pub mod routes;
pub mod schedules;
pub mod stations;
pub mod time;
pub mod trains;
pub mod types;

pub use pricing::{
    clean_fares, clean_pricing_coefficients, clean_pricing_profiles, round_number, round_to,
};
pub use routes::clean_routes;
pub use schedules::clean_schedules;
pub use stations::{clean_classes, clean_stations};
pub use time::minutes_to_time;
pub use trains::{clean_trains, parse_profile_ids};
pub use types::{
    Fare, PricingCoefficient, PricingProfile, Route, RouteStop, Schedule, Station, Train,
    TrainClass,
};

/// All nine clean tables of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanTables {
    pub stations: Vec<Station>,
    pub classes: Vec<TrainClass>,
    pub routes: Vec<Route>,
    pub route_stops: Vec<RouteStop>,
    pub trains: Vec<Train>,
    pub schedules: Vec<Schedule>,
    pub pricing_profiles: Vec<PricingProfile>,
    pub pricing_coefficients: Vec<PricingCoefficient>,
    pub fares: Vec<Fare>,
}
