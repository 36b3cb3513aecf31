//! Logging and metrics setup for binaries embedding the client.
//!
//! The library itself only emits `tracing` events and `metrics` counters;
//! nothing is recorded until a subscriber and a recorder are installed here.

use std::env;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::domain::BoxError;

/// Prometheus handle for on-demand rendering of the request counters.
pub type PrometheusHandle = metrics_exporter_prometheus::PrometheusHandle;

/// Selects the log output format (`LOG_FORMAT`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is human readable.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

/// Install the global tracing subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
/// Returns an error if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}

/// Install the global metrics recorder and return a handle for rendering.
///
/// No HTTP listener is started; callers render with `handle.render()`.
///
/// # Errors
/// Returns an error if a recorder is already installed or building fails.
pub fn init_metrics() -> Result<PrometheusHandle, metrics_exporter_prometheus::BuildError> {
    PrometheusBuilder::new().install_recorder()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_selection() {
        assert_eq!(LogFormat::from_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(None), LogFormat::Pretty);
    }

    #[test]
    fn test_metrics_recorder_renders_request_counters() {
        use std::sync::Arc;

        use crate::test_utils::{MockTransport, mock_client};

        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let transport = Arc::new(
            MockTransport::new()
                .with_response(200, r#"{"is_healthy": true}"#)
                .with_response(404, r#"{"status_code":404,"error":"Not Found","message":"x"}"#),
        );
        let client = mock_client(transport);

        metrics::with_local_recorder(&recorder, || {
            let _: serde_json::Value = client.get(&["health"]).unwrap();
            assert!(client.get::<serde_json::Value>(&["txs", "00"]).is_err());
        });

        let rendered = handle.render();
        assert!(rendered.contains("blockfrost_requests_total"));
        assert!(rendered.contains(r#"status="200""#));
        assert!(rendered.contains(r#"status="404""#));
        assert!(rendered.contains(r#"blockfrost_request_errors_total{kind="http"} 1"#));
    }
}
