//! Basket line-item synchronizer.
//!
//! The in-memory [`Basket`] is the authority for what the basket page shows.
//! It only changes when the basket-mutation collaborator confirms a request;
//! the rendered table is a pure projection of it ([`BasketView`]).

pub mod basket;
pub mod error;
pub mod line;
pub mod service;
pub mod synchronizer;
pub mod view;

pub use basket::{
    Basket, BasketPresentation, Completion, PendingQuantity, PendingRemoval, QuantityDecision,
};
pub use error::BasketError;
pub use line::{BasketLine, Clamp};
pub use service::BasketService;
pub use synchronizer::{BasketSynchronizer, QuantityOutcome, RemovalOutcome};
pub use view::{BasketRow, BasketView};
