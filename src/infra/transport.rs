//! Blocking `reqwest` implementation of [`HttpTransport`].

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::domain::{ApiError, ConfigError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Transport backed by a pooled blocking `reqwest` client.
///
/// Must not be created or dropped from inside an async runtime; wrap the
/// calls in `spawn_blocking` when used from async code.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "http_client".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(&TransportConfig::default())
    }
}

impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().map_err(transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body: body.to_vec(),
        })
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    };
    ApiError::transport(message, err)
}
