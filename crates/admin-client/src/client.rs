use crate::{ClientError, ClientResult};

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the admin REST API.
///
/// Cheap to clone; clones share the connection pool and the bearer token.
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    token: Arc<RwLock<Option<String>>>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Admin API URL (e.g., "http://localhost:8000/admin")
    pub fn new(base_url: &str) -> Self {
        Self::from_reqwest(base_url, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::from_reqwest(base_url, client))
    }

    fn from_reqwest(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
            client,
        }
    }

    /// Set or clear the bearer token attached to every request.
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Build a request with the bearer token when one is held
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let message = server_message(status, &body);
            debug!("Request failed with {}: {}", status, message);
            return Err(ClientError::server(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) async fn get(&self, path: &str) -> ClientResult<Value> {
        debug!("GET {}{}", self.base_url, path);
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        debug!("POST {}{}", self.base_url, path);
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        debug!("PUT {}{}", self.base_url, path);
        let req = self.request(Method::PUT, path).json(body);
        self.execute(req).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<Value> {
        debug!("DELETE {}{}", self.base_url, path);
        let req = self.request(Method::DELETE, path);
        self.execute(req).await
    }
}

/// Human-readable message for a non-2xx response.
///
/// Prefers the backend's `message`, then `detail` (string or validation
/// list), then a nested `error.message`, then the status line.
pub(crate) fn server_message(status: StatusCode, body: &Value) -> String {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }

    match body.get("detail") {
        Some(Value::String(detail)) => return detail.clone(),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
        _ => {}
    }

    if let Some(message) = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return message.to_string();
    }

    format!(
        "Error Code: {}\nMessage: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown error")
    )
}
