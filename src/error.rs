use std::fmt::Display;
use thiserror::Error;

/// The single error kind surfaced by this crate.
///
/// Both precondition violations (zero page number or page size against a
/// non-empty collection) and failures raised while materializing a fallible
/// source collapse into `InvalidArgument`; the message is the only
/// differentiator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PaginateError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Wrap a materialization failure, keeping its description.
    pub fn wrap(cause: impl Display) -> Self {
        Self::InvalidArgument(format!("source failed while paginating: {cause}"))
    }
}
