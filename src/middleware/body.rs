use axum::{body::Body, extract::Request};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Read the whole request body as JSON and hand back an equivalent request.
///
/// An empty body is treated as `{}` so the guards report the missing field
/// instead of a parse error.
pub async fn buffer_json_body(request: Request, limit: usize) -> Result<(Request, Value), ApiError> {
    let (parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::warn!("Failed to read request body: {}", e);
        ApiError::bad_request("Request body could not be read or is too large")
    })?;

    let payload = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::invalid_json(format!("Invalid JSON body: {}", e)))?
    };

    Ok((Request::from_parts(parts, Body::from(bytes)), payload))
}

/// Loose "is this value missing" test used by the guards.
///
/// Absent, null, false, 0 and "" all count as missing. Zero reps or zero
/// weight are therefore rejected as missing as well.
pub(crate) fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Whole JSON number that fits the 32-bit id/count columns
pub(crate) fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}
