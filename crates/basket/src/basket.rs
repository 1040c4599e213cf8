//! Authoritative basket state and its begin/complete transitions.
//!
//! Every mutation is two steps. `begin_*` validates and clamps locally, marks
//! the line busy and hands back a pending request. `complete_*` applies the
//! collaborator's answer for that request, unless a newer request has since
//! taken its place.

use serde::{Deserialize, Serialize};
use storefront_core::{
    DomainError, DomainResult, Money, Notice, ProductId, ServiceError, Ticket, TicketCounter,
    find_by_id, find_by_id_mut, first_duplicate,
};
use tracing::{debug, info, warn};

use crate::error::BasketError;
use crate::line::{BasketLine, BasketSeedRow, Clamp};

/// How the basket page is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasketPresentation {
    /// Table, totals and actions are shown.
    Populated,
    /// Table and actions are gone; the empty-basket message is shown.
    /// One-way for the page's lifetime.
    Empty,
}

/// A quantity update waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQuantity {
    pub ticket: Ticket,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A removal waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRemoval {
    pub ticket: Ticket,
    pub product_id: ProductId,
}

/// What `begin_quantity_change` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityDecision {
    /// Out of bounds: the control now shows `quantity`; nothing is sent.
    Clamped { product_id: ProductId, quantity: u32 },
    /// Send this request.
    Dispatch(PendingQuantity),
}

/// What a `complete_*` call did with a confirmed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response was applied.
    Applied,
    /// Applied, and it removed the last line: the basket just became empty.
    BecameEmpty,
    /// The response belongs to a superseded request and was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Basket {
    lines: Vec<BasketLine>,
    presentation: BasketPresentation,
    tickets: TicketCounter,
    notice: Option<Notice>,
}

impl Basket {
    pub fn new(lines: Vec<BasketLine>) -> DomainResult<Self> {
        if let Some(id) = first_duplicate(&lines) {
            return Err(DomainError::validation(format!("duplicate basket line for product {id}")));
        }
        let presentation = if lines.is_empty() {
            BasketPresentation::Empty
        } else {
            BasketPresentation::Populated
        };
        Ok(Self {
            lines,
            presentation,
            tickets: TicketCounter::default(),
            notice: None,
        })
    }

    /// Parse the page-load seed `[{id, name, quantity, price, stock}]`.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let rows: Vec<BasketSeedRow> = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("basket seed: {e}")))?;
        let lines = rows
            .into_iter()
            .map(BasketLine::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Basket::new(lines)
    }

    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&BasketLine> {
        find_by_id(&self.lines, &product_id)
    }

    pub fn presentation(&self) -> BasketPresentation {
        self.presentation
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Sum of `unit_price * quantity` over all remaining lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(BasketLine::line_total).sum()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Result<&mut BasketLine, BasketError> {
        find_by_id_mut(&mut self.lines, &product_id).ok_or(BasketError::UnknownLine(product_id))
    }

    pub fn begin_quantity_change(
        &mut self,
        product_id: ProductId,
        requested: i64,
    ) -> Result<QuantityDecision, BasketError> {
        let line = self.line_mut(product_id)?;
        if line.is_busy() {
            return Err(BasketError::Busy(product_id));
        }

        match line.clamp(requested) {
            Clamp::Clamped(quantity) => {
                let (min, max) = (line.min_quantity(), line.max_quantity());
                line.set_input(quantity);
                debug!(%product_id, requested, clamped = quantity, "basket quantity clamped");
                self.notice = Some(Notice::validation(format!(
                    "Quantity must be between {min} and {max}."
                )));
                Ok(QuantityDecision::Clamped {
                    product_id,
                    quantity,
                })
            }
            Clamp::Within(quantity) => {
                let ticket = self.tickets.next();
                let line = self.line_mut(product_id)?;
                line.set_input(quantity);
                line.mark_pending(ticket);
                self.notice = None;
                debug!(%product_id, quantity, %ticket, "basket quantity update dispatched");
                Ok(QuantityDecision::Dispatch(PendingQuantity {
                    ticket,
                    product_id,
                    quantity,
                }))
            }
        }
    }

    pub fn complete_quantity_change(
        &mut self,
        pending: PendingQuantity,
        response: Result<(), ServiceError>,
    ) -> Result<Completion, BasketError> {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id() == pending.product_id && l.pending() == Some(pending.ticket))
        else {
            debug!(
                product_id = %pending.product_id,
                ticket = %pending.ticket,
                "stale basket quantity response dropped"
            );
            return Ok(Completion::Stale);
        };

        match response {
            Ok(()) => {
                line.confirm_quantity(pending.quantity);
                info!(
                    product_id = %pending.product_id,
                    quantity = pending.quantity,
                    total = %self.total(),
                    "basket quantity confirmed"
                );
                Ok(Completion::Applied)
            }
            Err(err) => {
                line.settle();
                warn!(
                    product_id = %pending.product_id,
                    error = %err,
                    "basket quantity update failed"
                );
                self.notice = Some(Notice::from(&err));
                Err(BasketError::Service(err))
            }
        }
    }

    pub fn begin_removal(&mut self, product_id: ProductId) -> Result<PendingRemoval, BasketError> {
        let ticket = self.tickets.next();
        let line = self.line_mut(product_id)?;
        if line.is_busy() {
            return Err(BasketError::Busy(product_id));
        }
        line.mark_pending(ticket);
        self.notice = None;
        debug!(%product_id, %ticket, "basket removal dispatched");
        Ok(PendingRemoval { ticket, product_id })
    }

    pub fn complete_removal(
        &mut self,
        pending: PendingRemoval,
        response: Result<(), ServiceError>,
    ) -> Result<Completion, BasketError> {
        let Some(index) = self
            .lines
            .iter()
            .position(|l| {
                l.product_id() == pending.product_id && l.pending() == Some(pending.ticket)
            })
        else {
            debug!(
                product_id = %pending.product_id,
                ticket = %pending.ticket,
                "stale basket removal response dropped"
            );
            return Ok(Completion::Stale);
        };

        if let Err(err) = response {
            self.lines[index].settle();
            warn!(product_id = %pending.product_id, error = %err, "basket removal failed");
            self.notice = Some(Notice::from(&err));
            return Err(BasketError::Service(err));
        }

        self.lines.remove(index);
        info!(product_id = %pending.product_id, total = %self.total(), "basket line removed");

        if self.lines.is_empty() && self.presentation == BasketPresentation::Populated {
            self.presentation = BasketPresentation::Empty;
            info!("basket is now empty");
            return Ok(Completion::BecameEmpty);
        }
        Ok(Completion::Applied)
    }
}
