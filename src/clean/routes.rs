//! Sections to routes.
//!
//! The dump only encodes the order of stations along a section through the
//! row ids of its section rows. Here every section becomes a route, and its
//! rows become route stops with an explicit 1-based stop order.

use crate::clean::types::{RawSection, Route, RouteStop};
use std::collections::BTreeMap;

pub fn clean_routes(raw: Vec<RawSection>) -> (Vec<Route>, Vec<RouteStop>) {
    // BTreeMap iterates section ids in ascending order.
    let mut sections: BTreeMap<i64, Vec<RawSection>> = BTreeMap::new();
    for row in raw {
        sections.entry(row.sectionid).or_default().push(row);
    }

    let mut routes = Vec::with_capacity(sections.len());
    let mut route_stops = Vec::new();
    let mut stop_id: u64 = 0;

    for (route_id, mut rows) in sections {
        routes.push(Route { id: route_id });

        rows.sort_by_key(|row| row.id);
        for (order, row) in (1u32..).zip(rows) {
            stop_id += 1;
            route_stops.push(RouteStop {
                id: stop_id,
                route_id,
                station_id: row.stationid,
                distance_km: row.dist,
                stop_order: order,
            });
        }
    }

    (routes, route_stops)
}
