//! Metrics collection for GraphQL operation performance.
//!
//! This module provides metrics collection for admin API calls, including:
//! - Request latency histograms
//! - Request and error counters
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `operation`, `status`, `error_category`
//! - Metric recording is infallible and never disrupts API calls
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "infra_admin_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "infra_admin_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "infra_admin_errors_total";

/// Metric name for deserialization failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "infra_admin_deserialization_failures_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, timeouts)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Errors reported in the GraphQL `errors` array
    GraphQl,
    /// Response body did not have the expected shape
    Decode,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::GraphQl => "graphql",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ErrorCategory::Transport
            }
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Decode,
            ClientError::GraphQl { .. } => ErrorCategory::GraphQl,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for admin API calls.
///
/// A thin wrapper around the `metrics` crate macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a GraphQL request.
    ///
    /// `status` is the HTTP status, or `None` when no response was received.
    pub fn record_request_duration(
        &self,
        operation: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "operation" => operation.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, operation: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "operation" => operation.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, operation: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "operation" => operation.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, operation: &str, error: &ClientError) {
        self.record_error(operation, ErrorCategory::from(error));
    }

    /// Record a response body that failed to deserialize.
    pub fn record_deserialization_failure(&self, operation: &str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "operation" => operation.to_string(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::GraphQl.as_str(), "graphql");
        assert_eq!(ErrorCategory::Decode.as_str(), "decode");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_error_categorization() {
        let api_400 = ClientError::ApiError {
            status: 400,
            url: "test".to_string(),
            message: "bad request".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_400), ErrorCategory::Http4xx);

        let api_500 = ClientError::ApiError {
            status: 502,
            url: "test".to_string(),
            message: "bad gateway".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_500), ErrorCategory::Http5xx);

        let graphql = ClientError::GraphQl {
            operation: "InfraConfigs",
            messages: vec!["nope".to_string()],
        };
        assert_eq!(ErrorCategory::from(&graphql), ErrorCategory::GraphQl);

        let decode = ClientError::InvalidResponse("missing data".to_string());
        assert_eq!(ErrorCategory::from(&decode), ErrorCategory::Decode);

        assert_eq!(
            ErrorCategory::from(&ClientError::NotLoaded),
            ErrorCategory::Unknown
        );
    }

    #[test]
    fn test_metrics_collector_enabled() {
        let collector = MetricsCollector::new();
        assert!(collector.is_enabled());

        let disabled = MetricsCollector::disabled();
        assert!(!disabled.is_enabled());
        assert!(!MetricsCollector::default().is_enabled());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        let collector = MetricsCollector::new();
        collector.record_request("InfraConfigs");
        collector.record_request_duration("InfraConfigs", Duration::from_millis(5), Some(200));
        collector.record_error("InfraConfigs", ErrorCategory::Transport);
        collector.record_deserialization_failure("InfraConfigs");
    }
}
