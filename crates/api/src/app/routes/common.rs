use axum::http::StatusCode;

use crate::app::errors;

/// Parse a path id, mapping non-numeric input to a 400 instead of a 404.
pub fn parse_id(raw: &str, entity: &'static str) -> Result<i64, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("invalid {entity} id"),
        )
    })
}
