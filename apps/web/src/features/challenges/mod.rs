//! Student-facing challenge catalogue and flag submission.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
