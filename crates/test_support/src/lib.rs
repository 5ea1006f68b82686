//! Fakes for exercising `portal_auth` without a browser or a backend.
//!
//! Both fakes are cheap `Rc` handles: clone one before handing it to a
//! `SessionStore` and keep the clone to script or inspect it afterwards.

pub mod api;
pub mod storage;

pub use api::{Call, FakeAuthApi, Gate};
pub use storage::MemoryStore;

use portal_auth::{AuthResponse, Profile};
use serde_json::{Map, Value};

/// Profile with an id, a display name and an institutional email.
#[must_use]
pub fn profile(name: &str) -> Profile {
    let slug = name.to_lowercase().replace(' ', ".");
    Profile {
        id: Some(format!("id-{slug}")),
        full_name: Some(name.to_string()),
        email: Some(format!("{slug}@paruluniversity.ac.in")),
        extra: Map::from_iter([("erpNumber".to_string(), Value::from("2203031"))]),
    }
}

#[must_use]
pub fn auth_response(name: &str, token: &str) -> AuthResponse {
    AuthResponse {
        user: profile(name),
        token: token.to_string(),
    }
}
