//! Mock implementations for testing.
//!
//! [`MockTransport`] stands in for the HTTP layer: it records every
//! request and answers with scripted responses, so service
//! implementations can be exercised without network access.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{ApiError, HttpRequest, HttpResponse, HttpTransport};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, every call fails at the transport level.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }
}

/// Scripted HTTP transport.
///
/// Responses are matched in this order:
/// 1. routes registered with [`with_route`](Self::with_route), by URL path suffix;
/// 2. the queue filled by [`with_response`](Self::with_response), the last
///    queued response being repeated once the others are consumed;
/// 3. a Blockfrost-style `404 Not Found`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use blockfrost_client::domain::TransactionService;
/// use blockfrost_client::test_utils::{MockTransport, mock_client};
///
/// let transport = Arc::new(MockTransport::new().with_route("/stakes", 200, "[]"));
/// let client = mock_client(transport.clone());
///
/// assert!(client.transaction_stakes("abc").unwrap().is_empty());
/// assert_eq!(transport.call_count(), 1);
/// ```
pub struct MockTransport {
    config: MockConfig,
    routes: Vec<(String, HttpResponse)>,
    queue: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicU64,
}

impl MockTransport {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
            queue: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Queues a response for the next unrouted call.
    #[must_use]
    pub fn with_response(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(response(status, body.into()));
        self
    }

    /// Answers every request whose URL path ends with `path_suffix`.
    #[must_use]
    pub fn with_route(mut self, path_suffix: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .push((path_suffix.to_string(), response(status, body.into())));
        self
    }

    /// Gets the number of times `execute` was called.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Gets all recorded requests, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn next_response(&self, url: &str) -> HttpResponse {
        let path = url.split('?').next().unwrap_or(url);
        if let Some((_, routed)) = self
            .routes
            .iter()
            .filter(|(suffix, _)| path.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len())
        {
            return routed.clone();
        }

        let mut queue = self.queue.lock().unwrap();
        match queue.len() {
            0 => response(
                404,
                br#"{"status_code":404,"error":"Not Found","message":"The requested component has not been found."}"#.to_vec(),
            ),
            1 => queue[0].clone(),
            _ => queue.pop_front().unwrap(),
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for MockTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock transport error".to_string());
            return Err(ApiError::Transport {
                message: msg,
                source: None,
            });
        }

        Ok(self.next_response(&url))
    }
}

fn response(status: u16, body: Vec<u8>) -> HttpResponse {
    let reason = match status {
        200 => Some("OK"),
        400 => Some("Bad Request"),
        403 => Some("Forbidden"),
        404 => Some("Not Found"),
        418 => Some("I'm a teapot"),
        425 => Some("Too Early"),
        429 => Some("Too Many Requests"),
        500 => Some("Internal Server Error"),
        _ => None,
    };
    HttpResponse {
        status,
        reason: reason.map(str::to_string),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_repeats_last_response() {
        let mock = MockTransport::new()
            .with_response(200, "first")
            .with_response(201, "second");

        assert_eq!(mock.execute(HttpRequest::get("http://x/a")).unwrap().status, 200);
        assert_eq!(mock.execute(HttpRequest::get("http://x/b")).unwrap().status, 201);
        assert_eq!(mock.execute(HttpRequest::get("http://x/c")).unwrap().status, 201);
        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn test_routes_take_precedence_and_longest_suffix_wins() {
        let mock = MockTransport::new()
            .with_response(500, "queued")
            .with_route("/metadata", 200, "json")
            .with_route("/metadata/cbor", 200, "cbor");

        let cbor = mock
            .execute(HttpRequest::get("http://x/txs/a/metadata/cbor?count=1"))
            .unwrap();
        assert_eq!(cbor.body, b"cbor");

        let json = mock.execute(HttpRequest::get("http://x/txs/a/metadata")).unwrap();
        assert_eq!(json.body, b"json");

        let other = mock.execute(HttpRequest::get("http://x/txs/a")).unwrap();
        assert_eq!(other.status, 500);
    }

    #[test]
    fn test_unscripted_call_is_not_found() {
        let mock = MockTransport::new();
        let response = mock.execute(HttpRequest::get("http://x/y")).unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.reason.as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_failing_mock_records_request() {
        let mock = MockTransport::failing("Connection timeout");
        let err = mock.execute(HttpRequest::get("http://x/y")).unwrap_err();

        assert!(err.is_transport());
        assert_eq!(mock.requests().len(), 1);
        assert_eq!(mock.last_request().unwrap().url, "http://x/y");
    }
}
