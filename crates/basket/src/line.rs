//! A single basket row.

use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId, Ticket};

/// One product in the basket.
///
/// `quantity` is the last value the server confirmed; `input_quantity` is
/// what the quantity control currently shows. They differ only while a
/// request is pending or right after a local clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    product_id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u32,
    min_quantity: u32,
    max_quantity: u32,
    input_quantity: u32,
    pending: Option<Ticket>,
}

/// Result of fitting a requested quantity into a line's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    Within(u32),
    Clamped(u32),
}

impl BasketLine {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        min_quantity: u32,
        max_quantity: u32,
    ) -> DomainResult<Self> {
        if min_quantity > max_quantity {
            return Err(DomainError::validation(format!(
                "product {product_id}: min quantity {min_quantity} exceeds max {max_quantity}"
            )));
        }
        if quantity < min_quantity || quantity > max_quantity {
            return Err(DomainError::validation(format!(
                "product {product_id}: quantity {quantity} outside {min_quantity}..={max_quantity}"
            )));
        }
        Ok(Self {
            product_id,
            name: name.into(),
            unit_price,
            quantity,
            min_quantity,
            max_quantity,
            input_quantity: quantity,
            pending: None,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    pub fn input_quantity(&self) -> u32 {
        self.input_quantity
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Controls for this row are disabled while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clamp(&self, requested: i64) -> Clamp {
        let min = i64::from(self.min_quantity);
        let max = i64::from(self.max_quantity);
        if requested < min {
            Clamp::Clamped(self.min_quantity)
        } else if requested > max {
            Clamp::Clamped(self.max_quantity)
        } else {
            // in range, so it fits u32
            Clamp::Within(requested as u32)
        }
    }

    pub(crate) fn set_input(&mut self, value: u32) {
        self.input_quantity = value;
    }

    pub(crate) fn mark_pending(&mut self, ticket: Ticket) {
        self.pending = Some(ticket);
    }

    /// Drop the pending ticket and show the confirmed value again.
    pub(crate) fn settle(&mut self) {
        self.pending = None;
        self.input_quantity = self.quantity;
    }

    pub(crate) fn confirm_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.settle();
    }
}

impl Entity for BasketLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Row of the server-rendered basket seed: `{id, name, quantity, price: "9.99", stock}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BasketSeedRow {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    #[serde(deserialize_with = "Money::deserialize_major")]
    pub price: Money,
    pub stock: u32,
}

impl TryFrom<BasketSeedRow> for BasketLine {
    type Error = DomainError;

    /// Bounds are `1..=stock`. A seeded quantity above current stock widens
    /// the upper bound to that quantity; stock is re-checked at checkout.
    fn try_from(row: BasketSeedRow) -> Result<Self, Self::Error> {
        let min = 1;
        let max = row.stock.max(row.quantity).max(min);
        BasketLine::new(row.id, row.name, row.price, row.quantity, min, max)
    }
}
