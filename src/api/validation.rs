use crate::api::errors::ApiError;

/// Parses an `{id}` path segment. Anything that is not a base-10 `i32`
/// (including surrounding whitespace or overflow) is rejected.
pub(crate) fn parse_item_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::invalid_id())
}
