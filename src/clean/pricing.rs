//! Pricing profiles, their piecewise coefficients and pre-computed fares.

use crate::clean::types::{
    Fare, PricingCoefficient, PricingProfile, RawCoefficient, RawFare, RawProfile,
};
use crate::error::{CleanError, CleanResult};
use serde_json::{Number, Value};

/// Decimal places kept on coefficients.
pub const COEFFICIENT_DECIMALS: usize = 6;

/// Round to `decimals` places.
///
/// Formatting rounds the exact binary value correctly, with exact ties going
/// to even, so 0.1234565 (stored just below the tie) becomes 0.123456.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Round a JSON number to `decimals` places. Integers come back untouched,
/// so a raw `0` is written as `0`, not `0.0`.
pub fn round_number(value: Number, decimals: usize) -> Number {
    match value.as_f64() {
        Some(f) if value.is_f64() => Number::from_f64(round_to(f, decimals)).unwrap_or(value),
        _ => value,
    }
}

/// Integer view of a profile's rounding field; floats truncate toward zero.
fn rounding(profile_id: i64, value: &Value) -> CleanResult<i64> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| CleanError::InvalidRounding {
        profile_id,
        value: value.to_string(),
    })
}

pub fn clean_pricing_profiles(raw: Vec<RawProfile>) -> CleanResult<Vec<PricingProfile>> {
    raw.into_iter()
        .map(|p| -> CleanResult<PricingProfile> {
            Ok(PricingProfile {
                id: p.id,
                name: p.profilename.trim().to_string(),
                rounding: rounding(p.id, &p.rounding)?,
            })
        })
        .collect()
}

pub fn clean_pricing_coefficients(raw: Vec<RawCoefficient>) -> Vec<PricingCoefficient> {
    raw.into_iter()
        .map(|c| PricingCoefficient {
            id: c.id,
            profile_id: c.profileid,
            interval_distance: c.intervaldistance,
            coefficient_a: round_number(c.a, COEFFICIENT_DECIMALS),
            coefficient_b: round_number(c.b, COEFFICIENT_DECIMALS),
        })
        .collect()
}

pub fn clean_fares(raw: Vec<RawFare>) -> Vec<Fare> {
    raw.into_iter()
        .map(|s| Fare {
            id: s.id,
            profile_id: s.p,
            from_station_id: s.a,
            to_station_id: s.b,
            distance_km: s.d,
            price: s.y,
        })
        .collect()
}
