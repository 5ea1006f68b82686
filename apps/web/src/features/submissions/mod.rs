//! Flag submissions: a student's own history and the admin review queue.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
