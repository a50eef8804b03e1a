//! Raw dump rows and the clean records derived from them.
//!
//! Raw rows mirror the dump's column names; clean records carry the output
//! field names, in output order. Fields the cleaner only passes through
//! (coordinates, distances, prices) stay as JSON values so integers are not
//! turned into floats along the way.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Deserialize a field whose key must be present but whose value may be null.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

fn default_disp() -> Value {
    Value::from(1)
}

// =============================================================================
// Raw rows
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    pub id: i64,
    pub ar_stationname: String,
    pub en_stationname: String,
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lng: Value,
    /// Disposition flag; a missing key counts as 1
    #[serde(default = "default_disp")]
    pub disp: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawClass {
    pub id: i64,
    pub ar_classname: String,
    pub en_classname: String,
}

/// One station of a section. `id` is only an ordering key.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    pub id: i64,
    pub sectionid: i64,
    pub stationid: i64,
    pub dist: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTravel {
    pub id: i64,
    pub travelname: Value,
    #[serde(deserialize_with = "nullable")]
    pub classid: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub sectionid: Option<i64>,
    #[serde(default)]
    pub info: Option<String>,
    /// Comma-separated profile ids, a bare number, or nothing
    #[serde(default)]
    pub profiles: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTravelData {
    pub travelid: i64,
    pub stationid: i64,
    #[serde(deserialize_with = "nullable")]
    pub arriveschedule: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub schedule: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub id: i64,
    pub profilename: String,
    pub rounding: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCoefficient {
    pub id: i64,
    pub profileid: i64,
    pub intervaldistance: Value,
    pub a: Number,
    pub b: Number,
}

/// Pre-computed fare row with the spreadsheet's one-letter columns.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFare {
    pub id: i64,
    /// Profile id
    pub p: Value,
    /// From station id
    pub a: Value,
    /// To station id
    pub b: Value,
    /// Distance
    pub d: Value,
    /// Price
    pub y: Value,
}

// =============================================================================
// Clean records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name_ar: String,
    pub name_en: String,
    pub latitude: Value,
    pub longitude: Value,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainClass {
    pub id: i64,
    pub name_ar: String,
    pub name_en: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub id: u64,
    pub route_id: i64,
    pub station_id: i64,
    pub distance_km: Value,
    pub stop_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: i64,
    pub train_number: String,
    pub class_id: Option<i64>,
    pub route_id: Option<i64>,
    pub info: String,
    pub profile_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub train_id: i64,
    pub station_id: i64,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_minutes: Option<i64>,
    pub departure_minutes: Option<i64>,
    pub stop_order: u32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingProfile {
    pub id: i64,
    pub name: String,
    pub rounding: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCoefficient {
    pub id: i64,
    pub profile_id: i64,
    pub interval_distance: Value,
    pub coefficient_a: Number,
    pub coefficient_b: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    pub id: i64,
    pub profile_id: Value,
    pub from_station_id: Value,
    pub to_station_id: Value,
    pub distance_km: Value,
    pub price: Value,
}
