//! Dispatch result types and error definitions

use serde::Serialize;
use thiserror::Error;

use crate::mandrill::MandrillError;
use crate::template::TemplateError;

/// Outcome of a successful dispatch attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SendReceipt {
    /// Provider-assigned message identifier, when reported.
    pub message_id: Option<String>,

    /// Delivery status reported by the provider.
    pub status: String,
}

/// Errors that can fail a dispatch attempt.
///
/// `MissingCredential` and `Template` are pre-flight failures raised
/// before any network activity.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required configuration value was absent or empty.
    #[error("missing configuration value: {0}")]
    MissingCredential(&'static str),

    /// The named template could not be loaded.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The request never produced a usable provider response.
    #[error("provider request failed: {0}")]
    Transport(#[from] MandrillError),

    /// The provider accepted the request but flagged this message.
    #[error("provider rejected message: {0}")]
    ProviderRejected(String),

    /// The provider returned 2xx with a body of an unexpected shape.
    #[error("unexpected provider response shape")]
    UnexpectedResponseShape,
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;
