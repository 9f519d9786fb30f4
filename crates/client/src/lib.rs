//! Client for the admin GraphQL API that manages server infrastructure
//! configuration: SSO providers, mail delivery and analytics data sharing.
//!
//! Layers, bottom up:
//! - [`endpoints`]: GraphQL documents and raw operations over `reqwest`.
//! - [`InfraAdminClient`]: configured transport implementing [`InfraConfigApi`].
//! - [`settings`]: the editable view-model, reverse transformers and validator.
//! - [`ConfigHandler`]: load, edit and save one configuration session.

pub mod api;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod mutation;
pub mod notify;
mod serde_helpers;
pub mod settings;
pub mod telemetry;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api::InfraConfigApi;
pub use client::InfraAdminClient;
pub use client::builder::InfraAdminClientBuilder;
pub use error::{ClientError, Result};
pub use handler::{ConfigHandler, ReadState, SaveOutcome};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{AuthProvider, InfraConfigEntry, InfraConfigKey, ProviderDirective, ServiceStatus};
pub use mutation::execute_mutation;
pub use notify::{MessageKey, Notifier, RecordingNotifier, TracingNotifier};
pub use settings::{Config, EmptyField, Section};
pub use telemetry::{TracingConfig, TracingError, TracingGuard};
