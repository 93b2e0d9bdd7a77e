//! Common test utilities for the IAM client test suites.
//!
//! Provides a recording transport that captures every dispatched request
//! descriptor and replays queued response envelopes, so builder behavior can
//! be asserted without any network I/O.

use async_trait::async_trait;
use iam_client::{IamClient, IamError, IamResult, RequestDescriptor, ResponseEnvelope, Transport};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport double that records requests and replays queued responses.
///
/// When the response queue is empty, a `200` envelope with a null payload is
/// returned so tests that only inspect the captured request stay short.
pub struct RecordingTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<VecDeque<IamResult<ResponseEnvelope>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    /// Queue a successful response envelope.
    pub fn push_response(&self, response: ResponseEnvelope) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a transport failure.
    #[allow(dead_code)] // not every suite exercises failure replay
    pub fn push_error(&self, error: IamError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests captured so far.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of dispatches seen.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The single captured request; panics unless exactly one was dispatched.
    pub fn only_request(&self) -> RequestDescriptor {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one dispatch");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: RequestDescriptor) -> IamResult<ResponseEnvelope> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ResponseEnvelope::new(200, Value::Null)))
    }
}

/// Client wired to a recording transport against a fixed base URL.
pub fn test_client(transport: Arc<RecordingTransport>) -> IamClient {
    IamClient::new("https://iam.example.com/v1", transport)
}

/// A 201 envelope whose Location header points at the given resource ID.
pub fn created_response(id: &str) -> ResponseEnvelope {
    ResponseEnvelope::new(201, serde_json::json!({"raw": "body"})).with_header(
        "Location",
        format!("https://iam.example.com/v1/user/{id}"),
    )
}
