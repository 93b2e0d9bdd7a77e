//! Async client library for IAM user-management APIs.
//!
//! Provides fluent, type-safe request builders for a remote identity
//! service (users, identities, devices, profiles, password resets) with a
//! pluggable transport seam.
//!
//! # Core Components
//!
//! - [`IamClient`] - Entry point holding the base URL and transport
//! - [`UserBuilder`] / [`UsersBuilder`] - Per-entity and collection builders
//! - [`Transport`] - Trait for the network collaborator, with
//!   [`HttpTransport`] as the `reqwest`-backed default
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use iam_client::{IamClient, StaticTokenProvider};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IamClient::builder()
//!     .base_url("https://iam.example.com/v1")
//!     .token_provider(Arc::new(StaticTokenProvider::new("access-token")))
//!     .build()?;
//!
//! // Collection operations: the created user's ID comes back as the payload.
//! let created = client.users().create(json!({"email": "x@y.com"})).await?;
//!
//! // Per-entity operations.
//! let profile = client.user("abc123").get_profile().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;
pub mod request;
pub mod response;
pub mod transport;
pub mod uri;
pub mod users;
pub mod validate;

// Re-export commonly used types for convenience
pub use client::{IamClient, IamClientBuilder};
pub use error::{BuildResult, ClientBuildError, IamError, IamResult};
pub use request::{HttpMethod, RequestDescriptor};
pub use response::{ResponseEnvelope, extract_location_id};
pub use transport::{
    BasicCredentials, HttpTransport, StaticTokenProvider, TokenProvider, Transport,
};
pub use users::{UserBuilder, UserScope, UsersBuilder};
