//! Response envelope and location-identifier extraction.
//!
//! The envelope is a transport-neutral view of a remote response: status,
//! headers, and the parsed JSON payload. Create-style operations replace the
//! payload with the identifier extracted from the `Location` header before
//! handing the envelope back to the caller.

use crate::error::{IamError, IamResult};
use serde_json::Value;
use std::collections::HashMap;

/// Structured response from a transport dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    /// HTTP status code of the remote response
    pub status: u16,
    /// Response headers as received
    pub headers: HashMap<String, String>,
    /// Parsed JSON payload; `Value::Null` for empty bodies
    pub data: Value,
}

impl ResponseEnvelope {
    /// Create an envelope with the given status and payload and no headers.
    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            data,
        }
    }

    /// Add a header to the envelope.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Extract the created-resource identifier from a response.
///
/// The IAM service reports the identifier of a newly created resource as the
/// last path segment of the `Location` header. A trailing slash on the
/// location is tolerated.
pub fn extract_location_id(response: &ResponseEnvelope) -> IamResult<String> {
    let location = response.header("location").ok_or(IamError::MissingLocation)?;

    let id = location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");

    if id.is_empty() {
        return Err(IamError::MissingLocation);
    }
    Ok(id.to_string())
}

/// Replace the envelope payload with the extracted location identifier.
///
/// Applied on the success path of create-style operations; the caller
/// receives the new resource's ID instead of the raw response body.
pub fn into_location_id(mut response: ResponseEnvelope) -> IamResult<ResponseEnvelope> {
    let id = extract_location_id(&response)?;
    response.data = Value::String(id);
    Ok(response)
}
