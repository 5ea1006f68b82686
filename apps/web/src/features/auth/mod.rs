//! Browser side of authentication: the HTTP `AuthApi`, the `localStorage`
//! adapter, the Leptos context that owns the session store, and the route
//! guard. Session rules themselves live in `portal_auth`.
//!
//! Tokens and passwords pass through here; never log them.

pub(crate) mod client;
mod guards;
pub(crate) mod state;
mod storage;

pub(crate) use guards::RouteGuard;
pub(crate) use storage::BrowserStorage;
