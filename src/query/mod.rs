//! Query compilation: turn (time range, AOI, mapping) into the exact
//! catalog URL to fetch.
//!
//! Compiled queries are plain string concatenation against a base endpoint
//! that already ends in `?`. Coordinate values and timestamps are NOT
//! URL-escaped; the catalog accepts them raw and existing deployments
//! depend on the exact byte layout.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::config::AsfConfig;
use crate::domain::ProductMapping;
use crate::errors::{QueryError, QueryResult};

/// Build the search URL for one query.
///
/// Dispatch is a closed table over [`ProductMapping`]; unrecognized tags
/// never reach this function (the adapter drops them before compiling).
pub fn build_query(
    config: &AsfConfig,
    start: &str,
    end: &str,
    platform: &str,
    aoi: &Value,
    mapping: ProductMapping,
) -> QueryResult<String> {
    let start = normalize_timestamp(start)?;
    let end = normalize_timestamp(end)?;

    match mapping {
        ProductMapping::S1IwSlc => compile_slc(config, &start, &end, platform, aoi),
        ProductMapping::S1Grd => compile_grd(config, &start, &end, platform),
    }
}

/// Normalize a caller timestamp to the catalog's `YYYY-MM-DDTHH:MM:SSUTC`
/// form. A single trailing `Z` is stripped, fractional seconds are parsed
/// and discarded.
pub fn normalize_timestamp(raw: &str) -> QueryResult<String> {
    let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| {
        QueryError::TimeParse {
            input: raw.to_string(),
        }
    })?;
    Ok(format!("{}UTC", parsed.format("%Y-%m-%dT%H:%M:%S")))
}

fn compile_slc(
    config: &AsfConfig,
    start: &str,
    end: &str,
    platform: &str,
    aoi: &Value,
) -> QueryResult<String> {
    let ring = serialize_first_ring(aoi)?;

    let mut q = format!("{}polygon={}", config.search_url, ring);
    q.push_str(&format!("&start={}&end={}", start, end));
    q.push_str(&format!("&platform={}", platform));
    q.push_str("&processingLevel=SLC");
    q.push_str("&output=json");
    Ok(q)
}

fn compile_grd(config: &AsfConfig, start: &str, end: &str, platform: &str) -> QueryResult<String> {
    // GRD queries are not spatially filtered.
    let mut q = format!("{}start={}&end={}", config.search_url, start, end);
    q.push_str(&format!("&platform={}", platform));
    q.push_str("&processingLevel=GRD_HS,GRD_HD");
    q.push_str("&output=json");
    Ok(q)
}

/// Serialize the first ring of the AOI polygon as a flat
/// `lon1,lat1,lon2,lat2,...` list in point order.
///
/// Rings past the first (polygon holes) are dropped. Long-standing
/// behavior relied on by existing queries; do not "fix" without a
/// coordinated catalog-side change.
fn serialize_first_ring(aoi: &Value) -> QueryResult<String> {
    let rings = aoi
        .pointer("/location/coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            QueryError::MalformedQuery("aoi missing 'location.coordinates' polygon".to_string())
        })?;

    let ring = rings.first().and_then(Value::as_array).ok_or_else(|| {
        QueryError::MalformedQuery("aoi polygon has no coordinate rings".to_string())
    })?;

    let mut parts: Vec<String> = Vec::with_capacity(ring.len() * 2);
    for point in ring {
        let pair = point.as_array().ok_or_else(|| {
            QueryError::MalformedQuery("aoi ring contains a non-pair element".to_string())
        })?;
        for component in pair {
            if !component.is_number() {
                return Err(QueryError::MalformedQuery(
                    "aoi coordinate component is not numeric".to_string(),
                ));
            }
            parts.push(component.to_string());
        }
    }

    Ok(parts.join(","))
}
