//! Domain features and their API clients. Wire types compile on every target
//! so they can be unit tested natively; anything touching the browser is
//! wasm-only.

#[cfg(target_arch = "wasm32")]
pub(crate) mod auth;
pub(crate) mod challenges;
pub(crate) mod submissions;
