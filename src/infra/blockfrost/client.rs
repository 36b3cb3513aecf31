//! Blockfrost REST client core: URL construction, authentication and
//! response translation shared by every service implementation.

use std::sync::Arc;

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::domain::{
    ApiError, ConfigError, HttpRequest, HttpResponse, HttpTransport, PROJECT_ID_HEADER, Pagination,
};
use crate::infra::transport::{ReqwestTransport, TransportConfig};

use super::config::ClientConfig;

/// Blocking Blockfrost client.
///
/// Implements every service trait of [`crate::domain`]. Cloning is cheap
/// and clones share the underlying transport.
#[derive(Clone)]
pub struct BlockfrostClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    project_id: Arc<SecretString>,
}

impl BlockfrostClient {
    /// Create a client with a `reqwest` transport built from `config`
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&TransportConfig {
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
        })?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client on top of any transport (mocks, custom middleware)
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        debug!(base_url = %base_url, "Created Blockfrost client");
        Ok(Self {
            transport,
            base_url,
            project_id: Arc::new(config.project_id),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the absolute URL for `segments`, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&'static str, String)]) -> String {
        let mut url = self.base_url.clone();
        {
            // `parse_base_url` rejects cannot-be-a-base URLs.
            if let Ok(mut path) = url.path_segments_mut() {
                path.pop_if_empty().extend(segments);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url.into()
    }

    /// GET a single resource.
    pub(crate) fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments, &[]);
        let response = self.send(HttpRequest::get(url))?;
        decode(&response)
    }

    /// GET one page of a listing resource.
    pub(crate) fn get_page<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        pagination: &Pagination,
    ) -> Result<Vec<T>, ApiError> {
        pagination.validate()?;
        let url = self.endpoint(segments, &pagination.query_pairs());
        let response = self.send(HttpRequest::get(url))?;
        decode(&response)
    }

    /// POST a CBOR payload and return the identifier the server answers with.
    pub(crate) fn post_cbor(&self, segments: &[&str], payload: &[u8]) -> Result<String, ApiError> {
        let url = self.endpoint(segments, &[]);
        let request = HttpRequest::post(url, payload.to_vec())
            .with_header("Content-Type", "application/cbor");
        let response = self.send(request)?;
        submitted_id(&response)
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let request = request
            .with_header(PROJECT_ID_HEADER, self.project_id.expose_secret())
            .with_header("Accept", "application/json");

        let response = match self.transport.execute(request) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Blockfrost request failed before a response");
                metrics::counter!("blockfrost_request_errors_total", "kind" => "transport")
                    .increment(1);
                return Err(e);
            }
        };

        metrics::counter!(
            "blockfrost_requests_total",
            "method" => method,
            "status" => response.status.to_string()
        )
        .increment(1);

        if !response.is_success() {
            let err =
                ApiError::from_response(response.status, response.reason.as_deref(), &response.body);
            warn!(status = response.status, error = %err, "Blockfrost returned an error status");
            metrics::counter!("blockfrost_request_errors_total", "kind" => "http").increment(1);
            return Err(err);
        }

        debug!(status = response.status, bytes = response.body.len(), "Blockfrost request succeeded");
        Ok(response)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: "base_url".to_string(),
        message: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key: "base_url".to_string(),
            message: format!("'{raw}' is not an http(s) base URL"),
        });
    }
    Ok(url)
}

/// Extracts the identifier from a submission response.
///
/// The id comes back as a JSON string; a bare text body is tolerated. Any
/// other JSON document or an empty id is a decode failure.
fn submitted_id(response: &HttpResponse) -> Result<String, ApiError> {
    let id = match serde_json::from_slice::<serde_json::Value>(&response.body) {
        Ok(serde_json::Value::String(id)) => id,
        Ok(serde_json::Value::Number(_)) | Err(_) => {
            String::from_utf8_lossy(&response.body).into_owned()
        }
        Ok(other) => return Err(missing_id(response.status, &other.to_string())),
    };

    let id = id.trim().trim_matches('"').trim();
    if id.is_empty() {
        return Err(missing_id(response.status, "empty response body"));
    }
    Ok(id.to_string())
}

fn missing_id(status: u16, found: &str) -> ApiError {
    metrics::counter!("blockfrost_request_errors_total", "kind" => "decode").increment(1);
    ApiError::Decode {
        status,
        message: format!("expected a transaction id, got {found}"),
        source: None,
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        metrics::counter!("blockfrost_request_errors_total", "kind" => "decode").increment(1);
        ApiError::decode(response.status, e)
    })
}
