//! Drives [`Basket`] transitions through a [`BasketService`].

use storefront_core::ProductId;
use tracing::instrument;

use crate::basket::{Basket, Completion, QuantityDecision};
use crate::error::BasketError;
use crate::service::BasketService;

/// Outcome of [`BasketSynchronizer::request_quantity_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    /// Out of bounds; the control was reset to `quantity` and nothing was sent.
    Clamped { quantity: u32 },
    /// The server confirmed the new quantity.
    Confirmed { quantity: u32 },
    /// A newer request for the same line superseded this one.
    Superseded,
}

/// Outcome of [`BasketSynchronizer::request_removal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    /// The last line went away; show the empty-basket message.
    BasketEmptied,
    Superseded,
}

/// Basket state plus the collaborator that confirms its edits.
///
/// Runs on a single cooperative event loop; the collaborator future is the
/// only suspension point, and state is touched only before and after it.
pub struct BasketSynchronizer<S> {
    basket: Basket,
    service: S,
}

impl<S: BasketService> BasketSynchronizer<S> {
    pub fn new(basket: Basket, service: S) -> Self {
        Self { basket, service }
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn basket_mut(&mut self) -> &mut Basket {
        &mut self.basket
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    #[instrument(skip(self))]
    pub async fn request_quantity_change(
        &mut self,
        product_id: ProductId,
        requested: i64,
    ) -> Result<QuantityOutcome, BasketError> {
        let pending = match self.basket.begin_quantity_change(product_id, requested)? {
            QuantityDecision::Clamped { quantity, .. } => {
                return Ok(QuantityOutcome::Clamped { quantity });
            }
            QuantityDecision::Dispatch(pending) => pending,
        };

        let response = self
            .service
            .update_quantity(pending.product_id, pending.quantity)
            .await;

        match self.basket.complete_quantity_change(pending, response)? {
            Completion::Stale => Ok(QuantityOutcome::Superseded),
            Completion::Applied | Completion::BecameEmpty => Ok(QuantityOutcome::Confirmed {
                quantity: pending.quantity,
            }),
        }
    }

    #[instrument(skip(self))]
    pub async fn request_removal(
        &mut self,
        product_id: ProductId,
    ) -> Result<RemovalOutcome, BasketError> {
        let pending = self.basket.begin_removal(product_id)?;
        let response = self.service.remove_line(pending.product_id).await;

        match self.basket.complete_removal(pending, response)? {
            Completion::Applied => Ok(RemovalOutcome::Removed),
            Completion::BecameEmpty => Ok(RemovalOutcome::BasketEmptied),
            Completion::Stale => Ok(RemovalOutcome::Superseded),
        }
    }
}
