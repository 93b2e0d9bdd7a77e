//! Single-resource builder for one identified user.

use super::USER_RESOURCE;
use crate::error::IamResult;
use crate::request::RequestDescriptor;
use crate::response::{self, ResponseEnvelope};
use crate::transport::Transport;
use crate::uri::build_uri;
use crate::validate;
use log::debug;
use serde_json::Value;
use std::sync::Arc;

/// Builder for requests against a specific user.
///
/// The identifier is immutable once the builder is constructed. Every
/// operation requires authentication, attached by the transport.
#[derive(Clone)]
pub struct UserBuilder {
    base_url: String,
    id: String,
    transport: Arc<dyn Transport>,
}

impl UserBuilder {
    pub(crate) fn new(
        base_url: impl Into<String>,
        id: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            id: id.into(),
            transport,
        }
    }

    /// The identifier this builder is bound to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// URL of the user entity, without suffix.
    fn entity_url(&self) -> String {
        build_uri(&self.base_url, USER_RESOURCE, Some(&self.id))
    }

    /// URL of a sub-resource under the user entity.
    fn suffixed_url(&self, suffix: &str) -> String {
        format!("{}{}", self.entity_url(), suffix)
    }

    /// Fetch the user.
    pub async fn get(&self) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::get(self.entity_url());
        debug!("iam.user.get (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Update the user with the given data.
    pub async fn update(&self, data: Value) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::put(self.entity_url()).with_body(data);
        debug!("iam.user.update (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Delete the user.
    pub async fn delete(&self) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::delete(self.entity_url());
        debug!("iam.user.delete (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Sign the user out of the current session.
    pub async fn sign_out(&self) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::put(self.suffixed_url("/signout"));
        debug!("iam.user.sign_out (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Disconnect the user, invalidating all of their tokens.
    pub async fn disconnect(&self) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::put(self.suffixed_url("/disconnect"));
        debug!("iam.user.disconnect (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Link an identity (OAuth server or social network) to the user.
    ///
    /// Fails with [`IamError::MissingValue`](crate::IamError::MissingValue)
    /// before any dispatch when the identity is absent or empty; that is a
    /// caller error, not a network failure.
    pub async fn add_identity(&self, identity: Value) -> IamResult<ResponseEnvelope> {
        validate::require_value(&identity, "identity")?;
        let request = RequestDescriptor::post(self.suffixed_url("/identity")).with_body(identity);
        debug!("iam.user.add_identity (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Fetch the identities linked to the user.
    pub async fn get_identities(&self) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::get(self.suffixed_url("/identity"));
        debug!("iam.user.get_identities (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Register a notification device for the user.
    ///
    /// On success the envelope payload is replaced with the identifier of
    /// the registered device, extracted from the `Location` header.
    pub async fn register_device(&self, data: Value) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::put(self.suffixed_url("/devices")).with_body(data);
        debug!("iam.user.register_device (user: '{}', request: '{}')", self.id, request.request_id);
        let response = self.transport.send(request).await?;
        response::into_location_id(response)
    }

    /// Fetch one of the user's devices.
    pub async fn get_device(&self, device_id: &str) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::get(self.suffixed_url(&format!("/devices/{device_id}")));
        debug!("iam.user.get_device (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Fetch all of the user's devices.
    pub async fn get_devices(&self) -> IamResult<ResponseEnvelope> {
        // Trailing slash is part of the wire contract for this endpoint.
        let request = RequestDescriptor::get(self.suffixed_url("/devices/"));
        debug!("iam.user.get_devices (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Delete one of the user's devices.
    pub async fn delete_device(&self, device_id: &str) -> IamResult<ResponseEnvelope> {
        let request =
            RequestDescriptor::delete(self.suffixed_url(&format!("/devices/{device_id}")));
        debug!("iam.user.delete_device (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }

    /// Fetch the user's profile.
    pub async fn get_profile(&self) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::get(self.suffixed_url("/profile"));
        debug!("iam.user.get_profile (user: '{}', request: '{}')", self.id, request.request_id);
        self.transport.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopTransport;

    #[async_trait::async_trait]
    impl Transport for NoopTransport {
        async fn send(&self, _request: RequestDescriptor) -> IamResult<ResponseEnvelope> {
            unreachable!("these tests never dispatch")
        }
    }

    fn offline_builder() -> UserBuilder {
        UserBuilder::new("https://iam.example.com/v1", "abc123", Arc::new(NoopTransport))
    }

    #[test]
    fn test_entity_url() {
        let builder = offline_builder();
        assert_eq!(builder.entity_url(), "https://iam.example.com/v1/user/abc123");
        assert_eq!(
            builder.suffixed_url("/devices/"),
            "https://iam.example.com/v1/user/abc123/devices/"
        );
    }

    #[test]
    fn test_add_identity_rejects_missing_identity_before_dispatch() {
        let builder = offline_builder();
        let error = tokio_test::block_on(builder.add_identity(Value::Null)).unwrap_err();
        assert!(error.is_local());
    }
}
