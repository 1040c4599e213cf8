//! Request tickets: tie a confirmed response back to the request that caused it.
//!
//! A flow mints a ticket when it hands a request to a collaborator and
//! remembers it as *pending* on the control that triggered it. A completion
//! is applied only if its ticket is still the pending one; anything else is
//! a superseded response and is dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(u64);

impl core::fmt::Display for Ticket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic ticket source, one per flow.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn next(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}
