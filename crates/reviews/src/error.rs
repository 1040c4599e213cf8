use storefront_core::{DomainError, ServiceError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Rejected locally; no request was issued.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A submission is already in flight; the submit button is disabled.
    #[error("a review submission is already in flight")]
    Busy,

    #[error(transparent)]
    Service(#[from] ServiceError),
}
