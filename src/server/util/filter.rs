//! Parsing of enum-valued query filters.

use serde::de::DeserializeOwned;

use crate::server::error::validation::ValidationError;

/// Parses a query filter into one of the entity enums by its serialized name.
///
/// Empty values are treated as absent.
pub fn parse_filter<T: DeserializeOwned>(
    field: &str,
    value: Option<&str>,
) -> Result<Option<T>, ValidationError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map(Some)
        .map_err(|_| ValidationError::unknown_filter(field, value))
}
