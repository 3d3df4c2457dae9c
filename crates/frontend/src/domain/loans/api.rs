//! Loan gateways. The client never computes status transitions, it only
//! requests them; the remote system decides.

use contracts::envelope::{Ack, ApiResponse};
use contracts::loans::{BookLoan, ExtensionRequest, LoanRequest, LoanStatus};

use crate::shared::api_utils::api_url;
use crate::shared::http;
use crate::shared::toast::Toasts;
use crate::system::session::storage;

/// POST /book-loan-request. Authentication is a client-side precondition
/// here: with no stored token the call short-circuits without touching
/// the network.
pub async fn request_loan(toasts: Toasts, book_id: i64) -> bool {
    if storage::get_token().is_none() {
        toasts.error("You need to login first");
        return false;
    }
    let body = LoanRequest { book_id };
    match http::post_json::<_, Ack>(&api_url("/book-loan-request"), &body).await {
        Ok(ack) => {
            toasts.success(
                ack.message
                    .unwrap_or_else(|| "Book requested successfully".to_string()),
            );
            true
        }
        Err(failure) => {
            failure.report(toasts);
            false
        }
    }
}

/// GET /book-loans with an optional status filter.
pub async fn fetch_loans(toasts: Toasts, status: Option<LoanStatus>) -> Option<Vec<BookLoan>> {
    if storage::get_token().is_none() {
        return None;
    }
    let url = match status {
        Some(status) => format!("{}?status={}", api_url("/book-loans"), status.as_str()),
        None => api_url("/book-loans"),
    };
    match http::get_json::<ApiResponse<Vec<BookLoan>>>(&url).await {
        Ok(response) => Some(response.data),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

/// PUT /book-loans/{id}/request-due-date — body carries the new date and
/// a reason.
pub async fn request_extension(
    toasts: Toasts,
    loan_id: i64,
    due_date: String,
    reason: String,
) -> bool {
    if storage::get_token().is_none() {
        toasts.error("You need to login first");
        return false;
    }
    let body = ExtensionRequest { due_date, reason };
    let url = api_url(&format!("/book-loans/{}/request-due-date", loan_id));
    match http::put_json::<_, Ack>(&url, &body).await {
        Ok(ack) => {
            toasts.success(
                ack.message
                    .unwrap_or_else(|| "Extension requested successfully".to_string()),
            );
            true
        }
        Err(failure) => {
            failure.report(toasts);
            false
        }
    }
}

/// PATCH /book-loans/{id}/return.
pub async fn return_loan(toasts: Toasts, loan_id: i64) -> bool {
    if storage::get_token().is_none() {
        toasts.error("You need to login first");
        return false;
    }
    let url = api_url(&format!("/book-loans/{}/return", loan_id));
    match http::patch_json::<Ack>(&url).await {
        Ok(ack) => {
            toasts.success(
                ack.message
                    .unwrap_or_else(|| "Book returned successfully".to_string()),
            );
            true
        }
        Err(failure) => {
            failure.report(toasts);
            false
        }
    }
}
