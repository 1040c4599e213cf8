//! `storefront-core` — shared building blocks for the storefront client.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no rendering):
//! identifiers, money, request tickets, notices, and the error types every
//! flow speaks.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod notice;
pub mod ticket;

pub use entity::{Entity, find_by_id, find_by_id_mut, first_duplicate};
pub use error::{DomainError, DomainResult, ServiceError};
pub use id::ProductId;
pub use money::Money;
pub use notice::{Notice, NoticeKind};
pub use ticket::{Ticket, TicketCounter};
