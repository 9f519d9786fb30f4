//! GraphQL request sender.
//!
//! Responsibilities:
//! - POST a `{query, operationName, variables}` body with bearer auth.
//! - Map non-success HTTP statuses to [`ClientError::ApiError`] and a
//!   non-empty GraphQL `errors` array to [`ClientError::GraphQl`].
//! - Record per-operation request metrics.
//!
//! Does NOT handle:
//! - Retries. Every operation is sent exactly once.
//!
//! Invariants:
//! - A response with errors is a failure even when `data` is also present.

use std::time::Instant;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{GraphQlRequest, GraphQlResponse};
use crate::telemetry::inject_trace_context;

/// A GraphQL document together with the operation name it defines.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

/// Send one GraphQL operation and decode its `data` payload.
pub async fn send_graphql<T: DeserializeOwned>(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    operation: Operation,
    variables: Option<serde_json::Value>,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let body = GraphQlRequest {
        query: operation.document,
        operation_name: operation.name,
        variables,
    };

    let builder = client.post(graphql_url).bearer_auth(auth_token).json(&body);
    let builder = inject_trace_context(builder);

    if let Some(m) = metrics {
        m.record_request(operation.name);
    }
    debug!(operation = operation.name, "Sending GraphQL request");

    let started = Instant::now();
    let result = execute::<T>(builder, operation, metrics).await;

    if let Some(m) = metrics {
        let status = match &result {
            Ok((status, _)) => Some(*status),
            Err(ClientError::ApiError { status, .. }) => Some(*status),
            Err(_) => None,
        };
        m.record_request_duration(operation.name, started.elapsed(), status);
        if let Err(e) = &result {
            m.record_client_error(operation.name, e);
        }
    }

    result.map(|(_, data)| data)
}

async fn execute<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
    operation: Operation,
    metrics: Option<&MetricsCollector>,
) -> Result<(u16, T)> {
    let response = builder.send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());

        // Servers often put GraphQL errors in non-2xx bodies too.
        let message = match serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&body) {
            Ok(parsed) if !parsed.errors.is_empty() => parsed
                .errors
                .iter()
                .map(|e| e.describe())
                .collect::<Vec<_>>()
                .join("; "),
            _ => body,
        };

        return Err(ClientError::ApiError {
            status,
            url,
            message,
        });
    }

    let text = response.text().await?;
    let parsed: GraphQlResponse<T> = serde_json::from_str(&text).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(operation.name);
        }
        ClientError::InvalidResponse(format!(
            "{} response could not be decoded: {e}",
            operation.name
        ))
    })?;

    if !parsed.errors.is_empty() {
        return Err(ClientError::GraphQl {
            operation: operation.name,
            messages: parsed.errors.iter().map(|e| e.describe()).collect(),
        });
    }

    let data = parsed.data.ok_or_else(|| {
        ClientError::InvalidResponse(format!("{} response has no data", operation.name))
    })?;

    Ok((status, data))
}
