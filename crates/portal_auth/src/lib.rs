//! Framework-free core of the CTF portal: who is signed in, as which role, and
//! which views that identity may reach.
//!
//! ## Core Flows
//!
//! ### Startup restoration
//!
//! 1. **Lookup:** `SessionStore::restore` reads `adminToken`, then `userToken`.
//! 2. **Validate:** the matching profile endpoint is called with the token.
//! 3. **Settle:** success authenticates the session; any failure wipes every
//!    stored credential. Either way the session stops resolving.
//!
//! ### Login, registration and logout
//!
//! Successful logins persist the token and a cached profile under the role's
//! keys and drop the other role's entries. Logout is locally effective even
//! when the server call fails.
//!
//! ### Route decisions
//!
//! `guard::decide` maps a route category and a session snapshot to render,
//! redirect, or loading. `nav::active_flags` computes sidebar highlighting.
//!
//! The browser adapters (HTTP client, `localStorage`) live in the web app and
//! plug in through the `AuthApi` and `KeyValueStore` traits. Nothing here logs
//! tokens or passwords.

pub mod api;
pub mod error;
pub mod guard;
pub mod nav;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;

pub use api::AuthApi;
pub use error::{ApiError, AuthError, ErrorKind};
pub use guard::{GuardDecision, PathClass, RouteCategory};
pub use nav::NavEntry;
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, StorageError};
pub use types::{AuthResponse, Credentials, Profile, RegisterRequest, Role};
pub use validation::ValidationError;
