//! Create-review collaborator and the async flow that drives a [`ReviewBoard`].

use async_trait::async_trait;
use storefront_core::ServiceError;
use tracing::instrument;

use crate::board::{ReviewBoard, SubmitOutcome};
use crate::entry::{NewReview, Rating, ReviewEntry};
use crate::error::ReviewError;

/// `POST /add-review` (form-encoded, CSRF token in the body).
#[async_trait(?Send)]
pub trait ReviewService {
    async fn create_review(&self, review: &NewReview) -> Result<ReviewEntry, ServiceError>;
}

pub struct ReviewFlow<S> {
    board: ReviewBoard,
    service: S,
}

impl<S: ReviewService> ReviewFlow<S> {
    pub fn new(board: ReviewBoard, service: S) -> Self {
        Self { board, service }
    }

    pub fn board(&self) -> &ReviewBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut ReviewBoard {
        &mut self.board
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fill the form with `rating` and `comment`, then submit it.
    #[instrument(skip(self, comment), fields(product_id = %self.board.product_id()))]
    pub async fn submit_review(
        &mut self,
        rating: Rating,
        comment: &str,
    ) -> Result<SubmitOutcome, ReviewError> {
        self.board.set_rating(rating);
        self.board.set_comment(comment);

        let pending = self.board.begin_submit()?;
        let response = self.service.create_review(&pending.request).await;
        self.board.complete_submit(&pending, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::NaiveDate;
    use storefront_core::ProductId;

    #[derive(Default)]
    struct FakeReviews {
        received: RefCell<Vec<NewReview>>,
    }

    #[async_trait(?Send)]
    impl ReviewService for FakeReviews {
        async fn create_review(&self, review: &NewReview) -> Result<ReviewEntry, ServiceError> {
            self.received.borrow_mut().push(review.clone());
            Ok(ReviewEntry {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                rating: review.rating,
                comment: review.comment.clone(),
                created_at: NaiveDate::from_ymd_opt(2024, 5, 4)
                    .and_then(|d| d.and_hms_opt(12, 0, 0))
                    .unwrap(),
            })
        }
    }

    #[tokio::test]
    async fn empty_comment_issues_no_request() {
        let board = ReviewBoard::new(ProductId::new(1), Vec::new());
        let mut flow = ReviewFlow::new(board, FakeReviews::default());
        let err = flow.submit_review(Rating::MAX, "  ").await.unwrap_err();
        assert!(matches!(err, ReviewError::Domain(_)));
        assert!(flow.service().received.borrow().is_empty());
    }

    #[tokio::test]
    async fn confirmed_review_is_prepended() {
        let board = ReviewBoard::new(ProductId::new(1), Vec::new());
        let mut flow = ReviewFlow::new(board, FakeReviews::default());
        let outcome = flow.submit_review(Rating::try_from(3i64).unwrap(), " solid ").await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Appended);
        assert_eq!(flow.board().entries()[0].comment, "solid");
        assert_eq!(flow.board().form().rating, Rating::MIN);
        assert!(flow.board().form().comment.is_empty());
        assert_eq!(flow.service().received.borrow().len(), 1);
    }
}
