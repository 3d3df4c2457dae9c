//! Shared request plumbing for every API gateway.
//!
//! Each call is one-shot: no retries, no timeout, no cancellation.
//! `Accept: application/json` is always attached, a bearer token when one
//! is stored, and `Content-Type: application/json` only on bodied
//! requests (set by the builder's `json`).

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_error::ApiFailure;
use crate::system::session::storage;

fn with_common_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        log::warn!("HTTP {} from {}", response.status(), response.url());
        return Err(match response.text().await {
            Ok(body) => ApiFailure::from_body(&body),
            Err(_) => ApiFailure::Transport,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| {
            log::warn!("failed to parse response body: {}", err);
            ApiFailure::Transport
        })
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiFailure> {
    let response = with_common_headers(Request::get(url))
        .send()
        .await
        .map_err(|err| {
            log::warn!("failed to send request: {}", err);
            ApiFailure::Transport
        })?;
    parse_response(response).await
}

pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize,
    T: DeserializeOwned,
{
    send_with_body(Request::post(url), body).await
}

pub async fn put_json<B, T>(url: &str, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize,
    T: DeserializeOwned,
{
    send_with_body(Request::put(url), body).await
}

/// Bodyless PATCH (the return-loan endpoint takes no payload).
pub async fn patch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiFailure> {
    let response = with_common_headers(Request::patch(url))
        .send()
        .await
        .map_err(|err| {
            log::warn!("failed to send request: {}", err);
            ApiFailure::Transport
        })?;
    parse_response(response).await
}

async fn send_with_body<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = with_common_headers(builder).json(body).map_err(|err| {
        log::warn!("failed to serialize request: {}", err);
        ApiFailure::Transport
    })?;
    let response = request.send().await.map_err(|err| {
        log::warn!("failed to send request: {}", err);
        ApiFailure::Transport
    })?;
    parse_response(response).await
}
