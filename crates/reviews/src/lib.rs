//! Review append flow: validate locally, submit, prepend the confirmed review.

pub mod board;
pub mod entry;
pub mod error;
pub mod flow;

pub use board::{PendingReview, ReviewBoard, ReviewForm, SubmitOutcome};
pub use entry::{NewReview, Rating, ReviewEntry};
pub use error::ReviewError;
pub use flow::{ReviewFlow, ReviewService};
