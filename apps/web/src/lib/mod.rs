//! Shared frontend utilities: HTTP access, configuration and build metadata.
//!
//! Every API call goes through `api`, which applies the configured base URL,
//! the bearer token of the signed-in role and a request timeout. HTTP failures
//! are reduced to `portal_auth::ApiError` so pages render one error type.
//! Callers must not log request bodies; they carry passwords.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
