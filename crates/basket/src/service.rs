//! Basket-mutation collaborator boundary.

use async_trait::async_trait;
use storefront_core::{ProductId, ServiceError};

/// Remote endpoints that persist basket edits.
///
/// `Ok(())` is a confirmed response. Implementations attach the CSRF token
/// themselves.
#[async_trait(?Send)]
pub trait BasketService {
    /// `POST /update-basket` with `{product_id, quantity}`.
    async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), ServiceError>;

    /// `POST /delete-from-basket` with `{product_id}`.
    async fn remove_line(&self, product_id: ProductId) -> Result<(), ServiceError>;
}
