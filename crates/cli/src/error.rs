//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and failed mutations to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (128 + 2).

use infra_admin_client::ClientError;

use crate::cancellation::SIGINT_EXIT_CODE;
use crate::messages::CommandFailure;

/// Structured exit codes for `infra-admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Token rejected by the server.
    ///
    /// Scripts should refresh the token.
    AuthenticationFailed = 2,

    /// Network, timeout, DNS or an unusable base URL.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Endpoint not found (HTTP 404).
    NotFound = 4,

    /// Empty required fields, unknown field names, malformed responses.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Insufficient privileges (HTTP 403).
    PermissionDenied = 6,

    /// HTTP 429.
    RateLimited = 7,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            e if e.is_auth_error() => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::Validation(_)
            | ClientError::UnknownField { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,

            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,

            ClientError::AuthFailed(_)
            | ClientError::HttpError(_)
            | ClientError::ApiError { .. }
            | ClientError::GraphQl { .. }
            | ClientError::NotLoaded => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(failure) = cause.downcast_ref::<CommandFailure>() {
                return failure.exit_code;
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }
        ExitCode::GeneralError
    }
}
