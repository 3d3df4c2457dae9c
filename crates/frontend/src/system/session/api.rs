//! Authentication and account gateways.

use contracts::auth::{AuthResponse, ChangePasswordRequest, LoginRequest, UserStats};
use contracts::envelope::{Ack, ApiResponse};

use super::storage;
use crate::shared::api_utils::api_url;
use crate::shared::http;
use crate::shared::toast::Toasts;

/// POST /login. Returns the raw auth payload; the caller persists it
/// through `SessionService` so the change is broadcast to observers.
pub async fn login(toasts: Toasts, email: String, password: String) -> Option<AuthResponse> {
    let body = LoginRequest { email, password };
    match http::post_json::<_, AuthResponse>(&api_url("/login"), &body).await {
        Ok(auth) => Some(auth),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

/// GET /user/stats — loan and review counters for the profile page.
pub async fn fetch_user_stats(toasts: Toasts) -> Option<UserStats> {
    if storage::get_token().is_none() {
        return None;
    }
    match http::get_json::<ApiResponse<UserStats>>(&api_url("/user/stats")).await {
        Ok(response) => Some(response.data),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

/// POST /change-password.
pub async fn change_password(
    toasts: Toasts,
    current_password: String,
    password: String,
    password_confirmation: String,
) -> bool {
    if storage::get_token().is_none() {
        toasts.error("You need to login first");
        return false;
    }
    let body = ChangePasswordRequest {
        current_password,
        password,
        password_confirmation,
    };
    match http::post_json::<_, Ack>(&api_url("/change-password"), &body).await {
        Ok(ack) => {
            toasts.success(
                ack.message
                    .unwrap_or_else(|| "Password updated successfully".to_string()),
            );
            true
        }
        Err(failure) => {
            failure.report(toasts);
            false
        }
    }
}
