//! Pre-dispatch input validation.
//!
//! Validation failures here are caller errors raised synchronously, before
//! any network dispatch happens.

use crate::error::{IamError, IamResult};
use serde_json::Value;

/// Require a JSON value to be present and non-empty.
///
/// Null values, empty objects, empty arrays, and empty strings all count as
/// absent. The error names the offending field.
pub fn require_value(value: &Value, field: &str) -> IamResult<()> {
    let present = match value {
        Value::Null => false,
        Value::Object(object) => !object.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    };

    if present {
        Ok(())
    } else {
        Err(IamError::missing_value(field))
    }
}
