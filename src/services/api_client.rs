//! REST API client
//!
//! Thin wrapper around `reqwest` that resolves endpoint paths against the
//! configured base URL, attaches the bearer token, logs every call and turns
//! non-success responses into `ApiError`s.

use std::time::{Duration, Instant};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;
use crate::config::ApiConfig;
use crate::utils::errors::{ApiError, CourtDeskError, Result};
use crate::utils::logging;

/// Upper bound on followed `next` links for one list request
const MAX_PAGES: usize = 100;

/// List payload: either a bare array or a paginated envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Paginated(Page<T>),
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// The token is taken from `api.token`, falling back to the contents of
    /// `api.token_file`. A missing token file is not an error; requests are
    /// then sent anonymously.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(CourtDeskError::Http)?;

        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let token = match (&config.token, &config.token_file) {
            (Some(token), _) => Some(token.trim().to_string()),
            (None, Some(path)) => read_token_file(path)?,
            (None, None) => None,
        };

        Ok(Self { http, base_url, token })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fail early for endpoints that only make sense with credentials
    pub fn require_auth(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(CourtDeskError::Authentication("no API token configured".to_string()))
        }
    }

    /// Resolve an endpoint path (relative, e.g. `events/3/`)
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, method: Method, url: Url, build: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Result<Response> {
        let path = url.path().to_string();
        let method_name = method.as_str().to_string();
        logging::log_api_request(&method_name, &path);

        let started = Instant::now();
        let response = build(self.request(method, url)).send().await.map_err(|e| {
            logging::log_api_error("rest", &e.to_string(), Some(&path));
            CourtDeskError::Http(e)
        })?;

        let status = response.status().as_u16();
        logging::log_api_response(&method_name, &path, status, started.elapsed().as_millis() as u64);

        if response.status().is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status, &path, &body).into())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    /// GET a single JSON document
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(Method::GET, self.endpoint(path)?, |b| b).await?;
        Self::decode(response).await
    }

    /// GET a list, following pagination links until exhausted
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.collect_list(path, |b| b).await
    }

    /// GET a list with query parameters
    pub async fn get_list_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.collect_list(path, |b| b.query(query)).await
    }

    async fn collect_list<T: DeserializeOwned>(
        &self,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Vec<T>> {
        let first = self.execute(Method::GET, self.endpoint(path)?, build).await?;
        let page = match Self::decode::<ListResponse<T>>(first).await? {
            ListResponse::Plain(items) => return Ok(items),
            ListResponse::Paginated(page) => page,
        };
        debug!(path = path, count = ?page.count, "Received paginated list");

        let mut items = page.results;
        let mut next = page.next;
        let mut pages = 1;
        while let Some(link) = next.take() {
            if pages >= MAX_PAGES {
                warn!(path = path, pages = pages, "Stopped following pagination links");
                break;
            }
            let response = self.execute(Method::GET, Url::parse(&link)?, |b| b).await?;
            let page: Page<T> = Self::decode(response).await?;
            items.extend(page.results);
            next = page.next;
            pages += 1;
        }

        Ok(items)
    }

    /// POST a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, self.endpoint(path)?, |b| b.json(body)).await?;
        Self::decode(response).await
    }

    /// PATCH a JSON body
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PATCH, self.endpoint(path)?, |b| b.json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, self.endpoint(path)?, |b| b).await?;
        Ok(())
    }

    /// POST multipart form data (file uploads)
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: reqwest::multipart::Form) -> Result<T> {
        let response = self.execute(Method::POST, self.endpoint(path)?, |b| b.multipart(form)).await?;
        Self::decode(response).await
    }
}

fn read_token_file(path: &str) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let token = contents.trim();
            Ok((!token.is_empty()).then(|| token.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = path, "Token file not found, continuing without credentials");
            Ok(None)
        }
        Err(e) => Err(CourtDeskError::Io(e)),
    }
}

/// Classify a non-success response
pub fn error_for_status(status: u16, path: &str, body: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized { status },
        404 => ApiError::NotFound { path: path.to_string() },
        _ => ApiError::RequestFailed {
            status,
            message: server_message(body).unwrap_or_default(),
        },
    }
}

/// Pull a human readable message out of an error body
///
/// Looks for `detail`, `message` or `error`, then for the first per-field
/// error list (`{"title": ["This field is required."]}`).
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["detail", "message", "error"] {
        if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }

    object.iter().find_map(|(field, value)| {
        let first = match value {
            serde_json::Value::Array(items) => items.first()?.as_str()?,
            serde_json::Value::String(text) => text.as_str(),
            _ => return None,
        };
        Some(format!("{}: {}", field, first))
    })
}
