use crate::clean::types::{RawTravel, Train};
use crate::dump::TRAVELS;
use crate::error::{CleanError, CleanResult};
use serde_json::Value;
use std::borrow::Cow;

/// Parse the comma-separated profile ids of a travel.
///
/// Empty tokens are skipped; null, an empty string or a zero yields no ids.
pub fn parse_profile_ids(travel_id: i64, profiles: &Value) -> CleanResult<Vec<i64>> {
    let text: Cow<'_, str> = match profiles {
        Value::Null => return Ok(Vec::new()),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) if n.as_f64() == Some(0.0) => return Ok(Vec::new()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => {
            return Err(CleanError::InvalidProfileId {
                travel_id,
                token: other.to_string(),
            })
        }
    };

    let ids = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| CleanError::InvalidProfileId {
                travel_id,
                token: token.to_string(),
            })
        })
        .collect::<CleanResult<Vec<i64>>>()?;
    Ok(ids)
}

/// Train numbers come through as strings or bare numbers.
fn train_number(index: usize, travelname: &Value) -> CleanResult<String> {
    match travelname {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(CleanError::MalformedRow {
            table: TRAVELS.to_string(),
            index,
            message: format!("travelname must be a string or number, got {}", other),
        }),
    }
}

pub fn clean_trains(raw: Vec<RawTravel>) -> CleanResult<Vec<Train>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, t)| -> CleanResult<Train> {
            Ok(Train {
                id: t.id,
                train_number: train_number(index, &t.travelname)?,
                class_id: t.classid,
                route_id: t.sectionid,
                info: t.info.as_deref().unwrap_or_default().trim().to_string(),
                profile_ids: parse_profile_ids(t.id, &t.profiles)?,
            })
        })
        .collect()
}
