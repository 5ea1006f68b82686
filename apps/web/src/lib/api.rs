//! JSON helpers over `gloo-net` with a fixed timeout and uniform error
//! mapping. Tokens are attached as `Authorization: Bearer` headers only when
//! the caller passes one; nothing here stores or logs them.

use super::config::AppConfig;
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use portal_auth::ApiError;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::{AbortController, AbortSignal};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Patch,
}

/// GETs and decodes a JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let response = send(Method::Get, path, None, token).await?;
    decode(response).await
}

/// POSTs a JSON body and decodes the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = send(Method::Post, path, Some(encode(body)?), token).await?;
    decode(response).await
}

/// PATCHes a JSON body and decodes the JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = send(Method::Patch, path, Some(encode(body)?), token).await?;
    decode(response).await
}

/// POSTs without a body and ignores any response body.
pub async fn post_empty(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    let response = send(Method::Post, path, None, token).await?;
    ensure_success(response).await.map(drop)
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body)
        .map_err(|err| ApiError::Serialization(format!("failed to encode request: {err}")))
}

async fn send(
    method: Method,
    path: &str,
    payload: Option<String>,
    token: Option<&str>,
) -> Result<Response, ApiError> {
    let url = AppConfig::load().url(path);
    send_with_timeout(move |signal| {
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
        }
        .header("Accept", "application/json")
        .abort_signal(Some(signal));

        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match payload {
            Some(payload) => builder
                .header("Content-Type", "application/json")
                .body(payload),
            None => builder.build(),
        };
        request.map_err(|err| ApiError::Serialization(format!("failed to build request: {err}")))
    })
    .await
}

/// Maps network errors, treating an aborted request as a timeout.
fn map_request_error(err: &gloo_net::Error) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout
    } else {
        ApiError::Network(message)
    }
}

async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, ApiError>,
) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    // Dropping the handle cancels the timer once the response arrives.
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| map_request_error(&err))
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(format!("failed to decode response: {err}")))
}
