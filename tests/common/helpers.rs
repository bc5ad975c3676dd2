#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use httpline::pipeline::{policy_factory, NextPolicy, RequestPolicy, RequestPolicyFactory};
use httpline::transport::MockHttpClient;
use httpline::{HttpHeaders, HttpPipeline, HttpPipelineOptions, HttpRequest, HttpResponse, Result};
use reqwest::{Method, StatusCode};

// Common test constants
pub const TEST_URL: &str = "https://example.com/resource";
pub const TEST_USER_AGENT: &str = "my user agent string";

/// Initializes a tracing subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a GET request to the common test URL
pub fn create_test_request() -> HttpRequest {
    HttpRequest::new(Method::GET, TEST_URL).expect("Failed to create test request")
}

/// Creates a mock transport answering 200 with the given text body
pub fn create_mock_client(body: &str) -> Arc<MockHttpClient> {
    Arc::new(MockHttpClient::with_text(StatusCode::OK, body))
}

/// Creates a pipeline over a mock transport
pub fn create_test_pipeline(
    factories: Vec<Arc<dyn RequestPolicyFactory>>,
    client: Arc<MockHttpClient>,
) -> HttpPipeline {
    HttpPipeline::new(factories, HttpPipelineOptions::new(client))
}

// === Policies ===

/// Shared journal policies write their observations to
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn create_journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.lock().expect("journal poisoned").clone()
}

/// Records `"<name>:request"` and `"<name>:response"` around the call to next
pub struct JournalPolicy {
    next: NextPolicy,
    name: String,
    journal: Journal,
}

#[async_trait]
impl RequestPolicy for JournalPolicy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.journal
            .lock()
            .expect("journal poisoned")
            .push(format!("{}:request", self.name));
        let response = self.next.send(request).await;
        self.journal
            .lock()
            .expect("journal poisoned")
            .push(format!("{}:response", self.name));
        response
    }
}

pub fn journal_policy(name: &str, journal: &Journal) -> Arc<dyn RequestPolicyFactory> {
    let name = name.to_string();
    let journal = journal.clone();
    policy_factory(move |next, _| {
        Arc::new(JournalPolicy {
            next,
            name: name.clone(),
            journal: journal.clone(),
        })
    })
}

/// Sets a request header before forwarding
pub struct SetRequestHeaderPolicy {
    next: NextPolicy,
    name: String,
    value: String,
}

#[async_trait]
impl RequestPolicy for SetRequestHeaderPolicy {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        request.headers.set(self.name.clone(), self.value.clone());
        self.next.send(request).await
    }
}

pub fn set_request_header_policy(name: &str, value: &str) -> Arc<dyn RequestPolicyFactory> {
    let (name, value) = (name.to_string(), value.to_string());
    policy_factory(move |next, _| {
        Arc::new(SetRequestHeaderPolicy {
            next,
            name: name.clone(),
            value: value.clone(),
        })
    })
}

/// Sets a response header after next returns
pub struct SetResponseHeaderPolicy {
    next: NextPolicy,
    name: String,
    value: String,
}

#[async_trait]
impl RequestPolicy for SetResponseHeaderPolicy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut response = self.next.send(request).await?;
        response.headers_mut().set(self.name.clone(), self.value.clone());
        Ok(response)
    }
}

pub fn set_response_header_policy(name: &str, value: &str) -> Arc<dyn RequestPolicyFactory> {
    let (name, value) = (name.to_string(), value.to_string());
    policy_factory(move |next, _| {
        Arc::new(SetResponseHeaderPolicy {
            next,
            name: name.clone(),
            value: value.clone(),
        })
    })
}

/// Answers every request itself without calling next
pub struct ShortCircuitPolicy;

#[async_trait]
impl RequestPolicy for ShortCircuitPolicy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        Ok(HttpResponse::new(
            request,
            StatusCode::NOT_MODIFIED,
            HttpHeaders::new(),
            "cached",
        ))
    }
}

pub fn short_circuit_policy() -> Arc<dyn RequestPolicyFactory> {
    policy_factory(|_next, _| Arc::new(ShortCircuitPolicy))
}
