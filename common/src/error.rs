//! Failure type shared by every API call.
//!
//! There is a single error kind, [`OperationFailed`]. Its cause is kept for
//! the console log only; callers never branch on it.

use thiserror::Error;

use crate::graphql::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {cause}")]
pub struct OperationFailed {
    pub operation: Operation,
    #[source]
    pub cause: FailureCause,
}

impl OperationFailed {
    pub fn new(operation: Operation, cause: FailureCause) -> Self {
        Self { operation, cause }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("response carried no data")]
    EmptyResponse,

    #[error("API endpoint is not configured")]
    NotConfigured,
}
