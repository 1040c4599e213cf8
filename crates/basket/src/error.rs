use storefront_core::{DomainError, ProductId, ServiceError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// Local input or seed data failed validation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The basket has no line for this product.
    #[error("no basket line for product {0}")]
    UnknownLine(ProductId),

    /// A request for this line is still in flight; its controls are disabled.
    #[error("a request for product {0} is already in flight")]
    Busy(ProductId),

    /// The collaborator rejected or never answered the request.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
