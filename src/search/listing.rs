//! Parsing of the remote listing response.
//!
//! The listing endpoint is expected to return a JSON array of objects. Only the
//! `name` field of each record is consumed.

use crate::domain::{AutocompleteError, Candidate, Result};
use serde_json::Value;

/// Converts a listing response into candidates.
///
/// # Errors
///
/// - [`AutocompleteError::Fetch`] for an HTTP status outside `200..=299`
/// - [`AutocompleteError::Parse`] when the body is not valid JSON
///
/// Well-formed JSON of the wrong shape is not an error: a non-array, an empty
/// array, or an array whose first record has no `name` key all yield an empty
/// list.
///
/// # Example
///
/// ```
/// use autocomplete::search::listing::parse_listing;
///
/// let body = br#"[{"id": 1, "name": "Leanne Graham"}, {"id": 2}]"#;
/// let candidates = parse_listing(200, body).unwrap();
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0].name(), Some("Leanne Graham"));
/// assert_eq!(candidates[1].name(), None);
/// ```
pub fn parse_listing(status: u16, body: &[u8]) -> Result<Vec<Candidate>> {
    if !(200..=299).contains(&status) {
        return Err(AutocompleteError::Fetch(format!("HTTP status {status}")));
    }

    let value: Value = serde_json::from_slice(body)?;

    let Value::Array(records) = value else {
        tracing::debug!("listing response is not an array");
        return Ok(vec![]);
    };

    let first_has_name = records
        .first()
        .and_then(Value::as_object)
        .is_some_and(|record| record.contains_key("name"));

    if !first_has_name {
        tracing::debug!(records = records.len(), "listing response has no named records");
        return Ok(vec![]);
    }

    Ok(records
        .iter()
        .map(|record| Candidate {
            name: record.get("name").and_then(Value::as_str).map(String::from),
        })
        .collect())
}
