//! Transport-agnostic request descriptors.
//!
//! A [`RequestDescriptor`] encapsulates everything a transport needs to issue
//! one request: target URL, HTTP method, optional query string, optional JSON
//! body, and whether authentication must be attached. Descriptors are built
//! fresh per operation and never reused.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP methods used by the IAM API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// Retrieve a resource or collection
    Get,
    /// Create a sub-resource
    Post,
    /// Replace or act on a resource
    Put,
    /// Remove a resource
    Delete,
}

impl HttpMethod {
    /// Canonical wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Structured request for a single IAM operation.
///
/// An absent body is encoded as `None`, never as a JSON null. The
/// `request_id` is generated at construction and carried through transport
/// logs for correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method to use
    pub method: HttpMethod,
    /// Fully resolved target URL, without query string
    pub url: String,
    /// Pre-serialized query string, if any
    pub query: Option<String>,
    /// JSON payload for create/update operations
    pub body: Option<Value>,
    /// Whether the transport must attach authentication
    pub auth_required: bool,
    /// Request ID for tracing and correlation
    pub request_id: String,
}

impl RequestDescriptor {
    /// Create a descriptor with the given method and URL.
    ///
    /// Authentication is required by default; every operation on the IAM API
    /// is authenticated.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: None,
            body: None,
            auth_required: true,
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Create a GET descriptor.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Create a POST descriptor.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Create a PUT descriptor.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Create a DELETE descriptor.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Attach a pre-serialized query string.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Attach an optional pre-serialized query string.
    ///
    /// `None` leaves the descriptor without a query string, so the final URL
    /// carries no `?` separator at all.
    pub fn with_optional_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the generated request ID.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Final URL including the query string when one is present.
    pub fn full_url(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.url, query),
            None => self.url.clone(),
        }
    }
}
