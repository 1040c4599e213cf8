//! Displayed review list plus the submission form.

use storefront_core::{
    DomainError, DomainResult, Notice, ProductId, ServiceError, Ticket, TicketCounter,
};
use tracing::{debug, info, warn};

use crate::entry::{NewReview, Rating, ReviewEntry};
use crate::error::ReviewError;

/// Current values of the review form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: Rating,
    pub comment: String,
}

impl ReviewForm {
    pub fn reset(&mut self) {
        self.rating = Rating::MIN;
        self.comment.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReview {
    pub ticket: Ticket,
    pub request: NewReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The confirmed review is now at the head of the list.
    Appended,
    /// The response did not belong to the submission in flight.
    Stale,
}

/// Reviews for one product page, most recent first.
#[derive(Debug, Clone)]
pub struct ReviewBoard {
    product_id: ProductId,
    entries: Vec<ReviewEntry>,
    form: ReviewForm,
    pending: Option<Ticket>,
    tickets: TicketCounter,
    notice: Option<Notice>,
}

impl ReviewBoard {
    /// `entries` must already be most-recent-first, as the page renders them.
    pub fn new(product_id: ProductId, entries: Vec<ReviewEntry>) -> Self {
        Self {
            product_id,
            entries,
            form: ReviewForm::default(),
            pending: None,
            tickets: TicketCounter::default(),
            notice: None,
        }
    }

    /// Parse the page-rendered review seed for `product_id`.
    pub fn from_json(product_id: ProductId, raw: &str) -> DomainResult<Self> {
        let entries: Vec<ReviewEntry> = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("review seed: {e}")))?;
        Ok(Self::new(product_id, entries))
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.form.rating = rating;
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.form.comment = comment.into();
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The submit button is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the current form and mark a submission in flight.
    pub fn begin_submit(&mut self) -> Result<PendingReview, ReviewError> {
        if self.pending.is_some() {
            return Err(ReviewError::Busy);
        }

        let comment = self.form.comment.trim();
        if comment.is_empty() {
            debug!(product_id = %self.product_id, "review rejected: empty comment");
            self.notice = Some(Notice::validation("Please enter a Comment."));
            return Err(DomainError::validation("comment must not be empty").into());
        }

        let request = NewReview {
            product_id: self.product_id,
            rating: self.form.rating,
            comment: comment.to_string(),
        };
        let ticket = self.tickets.next();
        self.pending = Some(ticket);
        self.notice = None;
        debug!(
            product_id = %self.product_id,
            rating = request.rating.get(),
            %ticket,
            "review submission dispatched"
        );
        Ok(PendingReview { ticket, request })
    }

    pub fn complete_submit(
        &mut self,
        pending: &PendingReview,
        response: Result<ReviewEntry, ServiceError>,
    ) -> Result<SubmitOutcome, ReviewError> {
        if self.pending != Some(pending.ticket) {
            debug!(ticket = %pending.ticket, "stale review response dropped");
            return Ok(SubmitOutcome::Stale);
        }
        self.pending = None;

        match response {
            Ok(entry) => {
                info!(product_id = %self.product_id, author = %entry.author(), "review appended");
                self.entries.insert(0, entry);
                self.form.reset();
                Ok(SubmitOutcome::Appended)
            }
            Err(err) => {
                warn!(product_id = %self.product_id, error = %err, "review submission failed");
                self.notice = Some(Notice::from(&err));
                Err(ReviewError::Service(err))
            }
        }
    }
}
