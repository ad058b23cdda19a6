//! Response decoding: normalize the catalog's loosely typed JSON into
//! [`Granule`] records.

use serde_json::Value;

use crate::domain::Granule;
use crate::errors::{QueryError, QueryResult};

/// Decode one catalog response.
///
/// Anything other than a 200 fails with [`QueryError::BadResponse`] before
/// the body is parsed. A 200 body must be a JSON array whose first element
/// is the granule list; remaining top-level elements are ignored. One bad
/// granule fails the whole call, there is no partial-success mode.
pub fn decode_granules(status: u16, body: &str) -> QueryResult<Vec<Granule>> {
    if status != 200 {
        return Err(QueryError::BadResponse {
            status,
            body: body.to_string(),
        });
    }

    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| QueryError::MalformedResponse(format!("body is not JSON: {e}")))?;

    let top = parsed
        .as_array()
        .ok_or_else(|| QueryError::MalformedResponse("top level is not an array".to_string()))?;

    let granules = top
        .first()
        .ok_or_else(|| QueryError::MalformedResponse("top-level array is empty".to_string()))?
        .as_array()
        .ok_or_else(|| {
            QueryError::MalformedResponse("first top-level element is not an array".to_string())
        })?;

    let mut found = Vec::with_capacity(granules.len());
    for item in granules {
        found.push(decode_one(item)?);
    }
    Ok(found)
}

fn decode_one(item: &Value) -> QueryResult<Granule> {
    let title = required_str(item, "granuleName")?;
    let download_url = required_str(item, "downloadUrl")?;
    Ok(Granule {
        title,
        download_url,
    })
}

fn required_str(item: &Value, field: &str) -> QueryResult<String> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| QueryError::MalformedResponse(format!("granule missing field '{field}'")))
}
