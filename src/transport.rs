//! Transport seam and the default HTTP implementation.
//!
//! Builders never perform I/O themselves; they hand a
//! [`RequestDescriptor`](crate::request::RequestDescriptor) to a [`Transport`]
//! and get back a [`ResponseEnvelope`](crate::response::ResponseEnvelope).
//! [`HttpTransport`] is the default implementation on top of `reqwest`;
//! test suites substitute their own recording transports.
//!
//! No retry or timeout policy lives here. Callers needing timeouts configure
//! them on the `reqwest::Client` they hand to [`HttpTransport::with_client`].

use crate::error::{IamError, IamResult};
use crate::request::RequestDescriptor;
use crate::response::ResponseEnvelope;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Collaborator performing actual network I/O.
///
/// Implementations must translate network-level failures into
/// [`IamError::Transport`] and non-2xx responses into [`IamError::Http`];
/// the builders propagate both unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch one request and return the response envelope.
    async fn send(&self, request: RequestDescriptor) -> IamResult<ResponseEnvelope>;
}

/// Source of `Authorization` header values for authenticated requests.
///
/// Token issuance and refresh are outside this crate; implementations
/// typically wrap an externally managed access token.
pub trait TokenProvider: Send + Sync {
    /// Produce the full `Authorization` header value.
    fn authorization_header(&self) -> IamResult<String>;
}

/// Token provider wrapping a fixed bearer token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Wrap an already issued access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn authorization_header(&self) -> IamResult<String> {
        Ok(format!("Bearer {}", self.token))
    }
}

/// Client-credential provider producing `Basic` authorization headers.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    client_id: String,
    client_secret: String,
}

impl BasicCredentials {
    /// Pair a client ID with its secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl TokenProvider for BasicCredentials {
    fn authorization_header(&self) -> IamResult<String> {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        Ok(format!("Basic {}", BASE64_STANDARD.encode(credentials)))
    }
}

/// Default transport on top of `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest` client.
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self::with_client(reqwest::Client::new(), token_provider)
    }

    /// Create a transport with a caller-configured `reqwest` client.
    ///
    /// Timeouts, proxies, and connection pooling belong on the client.
    pub fn with_client(client: reqwest::Client, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            token_provider,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestDescriptor) -> IamResult<ResponseEnvelope> {
        let url = request.full_url();
        debug!(
            "dispatching {} {} (request: '{}')",
            request.method, url, request.request_id
        );

        let mut builder = self
            .client
            .request(reqwest::Method::from(request.method), &url);

        if request.auth_required {
            builder = builder.header(
                reqwest::header::AUTHORIZATION,
                self.token_provider.authorization_header()?,
            );
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            if err.is_builder() {
                IamError::invalid_url(&url, err.to_string())
            } else {
                IamError::transport(format!("request failed: {err}"))
            }
        })?;

        let status = response.status();
        let headers = collect_headers(response.headers());
        let text = response
            .text()
            .await
            .map_err(|err| IamError::transport(format!("failed to read response body: {err}")))?;

        if !status.is_success() {
            warn!(
                "remote returned {} (request: '{}')",
                status, request.request_id
            );
            return Err(IamError::http(status.as_u16(), text));
        }

        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ResponseEnvelope {
            status: status.as_u16(),
            headers,
            data,
        })
    }
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}
