//! Collection builder for the unscoped user resource.

use super::USER_RESOURCE;
use crate::error::IamResult;
use crate::params::serialize_params;
use crate::request::RequestDescriptor;
use crate::response::{self, ResponseEnvelope};
use crate::transport::Transport;
use crate::uri::build_uri;
use log::debug;
use serde_json::Value;
use std::sync::Arc;

/// Builder for requests over the user collection.
///
/// Every operation requires authentication, attached by the transport.
#[derive(Clone)]
pub struct UsersBuilder {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl UsersBuilder {
    pub(crate) fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// URL of the user collection, without suffix.
    fn collection_url(&self) -> String {
        build_uri(&self.base_url, USER_RESOURCE, None)
    }

    /// List users, optionally filtered by the given parameters.
    ///
    /// With no parameters (or an empty object) the query string is omitted
    /// entirely.
    pub async fn get(&self, params: Option<Value>) -> IamResult<ResponseEnvelope> {
        let query = params.as_ref().and_then(serialize_params);
        let request = RequestDescriptor::get(self.collection_url()).with_optional_query(query);
        debug!("iam.users.get (request: '{}')", request.request_id);
        self.transport.send(request).await
    }

    /// Create a new user.
    ///
    /// On success the envelope payload is replaced with the identifier of
    /// the created user, extracted from the `Location` header.
    pub async fn create(&self, data: Value) -> IamResult<ResponseEnvelope> {
        let request = RequestDescriptor::post(self.collection_url()).with_body(data);
        debug!("iam.users.create (request: '{}')", request.request_id);
        let response = self.transport.send(request).await?;
        response::into_location_id(response)
    }

    /// Trigger a reset-password email to the given address.
    ///
    /// The email address is carried verbatim as `email=<address>`; the
    /// service expects the value unencoded. On success the envelope payload
    /// is replaced with the extracted location identifier.
    pub async fn send_reset_password_email(&self, email: &str) -> IamResult<ResponseEnvelope> {
        let url = format!("{}/resetPassword", self.collection_url());
        let request = RequestDescriptor::get(url).with_query(format!("email={email}"));
        debug!("iam.users.send_reset_password_email (request: '{}')", request.request_id);
        let response = self.transport.send(request).await?;
        response::into_location_id(response)
    }

    /// Fetch user profiles, optionally filtered by the given parameters.
    pub async fn get_profiles(&self, params: Option<Value>) -> IamResult<ResponseEnvelope> {
        let url = format!("{}/profile", self.collection_url());
        let query = params.as_ref().and_then(serialize_params);
        let request = RequestDescriptor::get(url).with_optional_query(query);
        debug!("iam.users.get_profiles (request: '{}')", request.request_id);
        self.transport.send(request).await
    }
}
