//! Per-station schedule entries to ordered train schedules.
//!
//! Rows are grouped by train and ordered by arrival. A missing arrival (the
//! origin stop) sorts before any recorded minute, negative minutes sort before
//! non-negative ones, and equal arrivals keep their dump order.

use crate::clean::time::minutes_to_time;
use crate::clean::types::{RawTravelData, Schedule};
use std::collections::BTreeMap;

pub fn clean_schedules(raw: Vec<RawTravelData>) -> Vec<Schedule> {
    let mut trains: BTreeMap<i64, Vec<RawTravelData>> = BTreeMap::new();
    for row in raw {
        trains.entry(row.travelid).or_default().push(row);
    }

    let mut schedules = Vec::new();
    let mut schedule_id: u64 = 0;

    for (train_id, mut stops) in trains {
        // Option orders None first; sort_by_key is stable.
        stops.sort_by_key(|td| td.arriveschedule);

        for (order, td) in (1u32..).zip(stops) {
            schedule_id += 1;
            schedules.push(Schedule {
                id: schedule_id,
                train_id,
                station_id: td.stationid,
                arrival_time: minutes_to_time(td.arriveschedule),
                departure_time: minutes_to_time(td.schedule),
                arrival_minutes: td.arriveschedule,
                departure_minutes: td.schedule,
                stop_order: order,
                note: td.note.as_deref().unwrap_or_default().trim().to_string(),
            });
        }
    }

    schedules
}
