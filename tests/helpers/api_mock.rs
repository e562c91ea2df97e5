//! Mock facility REST API for testing
//!
//! Wraps a wiremock server and builds clients and services pointed at it.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use CourtDesk::config::ApiConfig;
use CourtDesk::forms::FormLimits;
use CourtDesk::services::{ApiClient, ServiceFactory};

pub const TEST_TOKEN: &str = "test-token-123";

/// Mock REST API server
pub struct ApiMockServer {
    pub server: MockServer,
}

impl ApiMockServer {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL the way it appears in configuration
    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Absolute URL of an API path, used for pagination links
    pub fn url(&self, api_path: &str) -> String {
        format!("{}/api/{}", self.server.uri(), api_path.trim_start_matches('/'))
    }

    pub fn api_config(&self, token: Option<&str>) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            timeout_seconds: 5,
            token: token.map(str::to_string),
            ..ApiConfig::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.api_config(Some(TEST_TOKEN))).expect("client")
    }

    pub fn anonymous_client(&self) -> ApiClient {
        ApiClient::new(&self.api_config(None)).expect("client")
    }

    pub fn services(&self) -> ServiceFactory {
        ServiceFactory::with_client(self.client(), FormLimits::default())
    }

    /// Respond to an authorized GET with a JSON body
    pub async fn mock_get(&self, api_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/{}", api_path)))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to any GET on `api_path`, with or without credentials
    pub async fn mock_public_get(&self, api_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/{}", api_path)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond with an error status and optional JSON body
    pub async fn mock_error(&self, http_method: &str, api_path: &str, status: u16, body: Option<Value>) {
        let mut response = ResponseTemplate::new(status);
        if let Some(body) = body {
            response = response.set_body_json(body);
        }
        Mock::given(method(http_method))
            .and(path(format!("/api/{}", api_path)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Paginated envelope whose `next` points at `next_path`
    pub fn page(&self, results: Value, count: usize, next_path: Option<&str>) -> Value {
        json!({
            "count": count,
            "next": next_path.map(|p| self.url(p)),
            "previous": null,
            "results": results,
        })
    }

    /// Bodies of every request received so far for `api_path` and `http_method`
    pub async fn request_bodies(&self, http_method: &str, api_path: &str) -> Vec<Value> {
        let expected = format!("/api/{}", api_path);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == expected)
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}
