//! Request and response bodies of the storefront endpoints.
//!
//! These types must not depend on native-only crates; the wasm frontend
//! sends the same shapes.

use serde::{Deserialize, Serialize};
use storefront_core::ProductId;
use storefront_reviews::NewReview;

/// `POST /update-basket` body. The endpoint expects the id as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBasketRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl UpdateBasketRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id: product_id.to_string(),
            quantity,
        }
    }
}

/// `POST /delete-from-basket` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromBasketRequest {
    pub product_id: String,
}

impl RemoveFromBasketRequest {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id: product_id.to_string(),
        }
    }
}

/// `POST /add-review` form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddReviewForm {
    pub product_id: String,
    pub rating: u8,
    pub comment: String,
    pub csrf_token: String,
}

impl AddReviewForm {
    pub fn new(review: &NewReview, csrf_token: &str) -> Self {
        Self {
            product_id: review.product_id.to_string(),
            rating: review.rating.get(),
            comment: review.comment.clone(),
            csrf_token: csrf_token.to_string(),
        }
    }
}

/// Error body some endpoints return on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "error")]
    pub message: String,
}
