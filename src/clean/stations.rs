use crate::clean::types::{RawClass, RawStation, Station, TrainClass};
use serde_json::Value;

/// A station is active only when its disposition flag equals 1.
fn is_active(disp: &Value) -> bool {
    disp.as_f64() == Some(1.0)
}

pub fn clean_stations(raw: Vec<RawStation>) -> Vec<Station> {
    raw.into_iter()
        .map(|s| Station {
            id: s.id,
            name_ar: s.ar_stationname.trim().to_string(),
            name_en: s.en_stationname.trim().to_string(),
            latitude: s.lat,
            longitude: s.lng,
            is_active: is_active(&s.disp),
        })
        .collect()
}

pub fn clean_classes(raw: Vec<RawClass>) -> Vec<TrainClass> {
    raw.into_iter()
        .map(|c| TrainClass {
            id: c.id,
            name_ar: c.ar_classname.trim().to_string(),
            name_en: c.en_classname.trim().to_string(),
        })
        .collect()
}
