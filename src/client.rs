//! Client entry point and configuration builder.

use crate::error::{BuildResult, ClientBuildError};
use crate::transport::{HttpTransport, TokenProvider, Transport};
use crate::users::{UserBuilder, UserScope, UsersBuilder};
use std::sync::Arc;

/// Entry point for issuing IAM requests.
///
/// Holds the service base URL and the transport; all request builders are
/// cheap value objects created on demand.
///
/// # Examples
///
/// ```rust,no_run
/// use iam_client::{IamClient, StaticTokenProvider};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IamClient::builder()
///     .base_url("https://iam.example.com/v1")
///     .token_provider(Arc::new(StaticTokenProvider::new("access-token")))
///     .build()?;
///
/// let user = client.user("abc123").get().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct IamClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl IamClient {
    /// Create a client directly from a base URL and transport.
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Start building a client.
    pub fn builder() -> IamClientBuilder {
        IamClientBuilder::default()
    }

    /// The configured service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builder for operations on one identified user.
    pub fn user(&self, id: impl Into<String>) -> UserBuilder {
        UserBuilder::new(&self.base_url, id, Arc::clone(&self.transport))
    }

    /// Builder for operations over the user collection.
    pub fn users(&self) -> UsersBuilder {
        UsersBuilder::new(&self.base_url, Arc::clone(&self.transport))
    }

    /// Select a builder variant based on identifier presence.
    ///
    /// An ID yields [`UserScope::Single`], no ID yields
    /// [`UserScope::Collection`]. Pure dispatch with no side effects.
    pub fn user_scope(&self, id: Option<String>) -> UserScope {
        match id {
            Some(id) => UserScope::Single(self.user(id)),
            None => UserScope::Collection(self.users()),
        }
    }
}

/// Builder for [`IamClient`] configuration.
///
/// The base URL is required. The transport may be supplied directly, or a
/// [`TokenProvider`] may be supplied and a default [`HttpTransport`] is
/// constructed around it.
#[derive(Default)]
pub struct IamClientBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl IamClientBuilder {
    /// Set the service base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a transport directly.
    ///
    /// Takes precedence over [`token_provider`](Self::token_provider).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Supply a token provider for the default HTTP transport.
    pub fn token_provider(mut self, token_provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(token_provider);
        self
    }

    /// Build the client, validating the configuration.
    pub fn build(self) -> BuildResult<IamClient> {
        let base_url = self.base_url.ok_or(ClientBuildError::MissingBaseUrl)?;

        let transport = match (self.transport, self.token_provider) {
            (Some(transport), _) => transport,
            (None, Some(token_provider)) => Arc::new(HttpTransport::new(token_provider)),
            (None, None) => return Err(ClientBuildError::MissingTransport),
        };

        Ok(IamClient::new(base_url, transport))
    }
}
