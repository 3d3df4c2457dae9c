//! Rating/review gateways.

use contracts::envelope::{Ack, ApiResponse};
use contracts::feedback::{Feedback, FeedbackRequest};

use crate::shared::api_utils::api_url;
use crate::shared::http;
use crate::shared::toast::Toasts;
use crate::system::session::storage;

/// UI precondition: a rating must be chosen before anything is sent.
pub fn rating_valid(rating: u8) -> bool {
    (1..=5).contains(&rating)
}

/// POST /books/{id}/feedback. Rejects an unset rating and a missing token
/// client-side, before any network call.
pub async fn submit_feedback(toasts: Toasts, book_id: i64, rating: u8, review: String) -> bool {
    if !rating_valid(rating) {
        toasts.error("Please select a rating first");
        return false;
    }
    if storage::get_token().is_none() {
        toasts.error("You need to login first");
        return false;
    }
    let body = FeedbackRequest { rating, review };
    let url = api_url(&format!("/books/{}/feedback", book_id));
    match http::post_json::<_, Ack>(&url, &body).await {
        Ok(ack) => {
            toasts.success(
                ack.message
                    .unwrap_or_else(|| "Feedback submitted successfully".to_string()),
            );
            true
        }
        Err(failure) => {
            failure.report(toasts);
            false
        }
    }
}

/// GET /books/{id}/feedback.
pub async fn fetch_feedback(toasts: Toasts, book_id: i64) -> Option<Vec<Feedback>> {
    let url = api_url(&format!("/books/{}/feedback", book_id));
    match http::get_json::<ApiResponse<Vec<Feedback>>>(&url).await {
        Ok(response) => Some(response.data),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rating_is_rejected() {
        assert!(!rating_valid(0));
    }

    #[test]
    fn ratings_one_to_five_accepted() {
        for rating in 1..=5 {
            assert!(rating_valid(rating));
        }
        assert!(!rating_valid(6));
    }
}
