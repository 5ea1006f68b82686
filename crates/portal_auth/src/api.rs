//! Seam between the session store and the remote auth endpoints. The web app
//! implements this over `gloo-net`; tests script it.
//!
//! Student endpoints: `POST /auth/login`, `POST /auth/register`,
//! `POST /auth/logout`, `GET /auth/me`. Admin endpoints live in their own
//! credential namespace: `POST /admin/login`, `POST /admin/logout`,
//! `GET /admin/profile`.

use crate::{
    error::ApiError,
    types::{AuthResponse, Credentials, Profile, RegisterRequest, Role},
};

/// Remote auth operations, dispatched by role where the backend splits them.
///
/// Futures are not required to be `Send`: implementations run on the browser
/// event loop.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// # Errors
    /// Returns the transport, HTTP, or decoding failure.
    async fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> Result<AuthResponse, ApiError>;

    /// Registers a student account.
    ///
    /// # Errors
    /// Returns the transport, HTTP, or decoding failure.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// # Errors
    /// Returns the transport or HTTP failure.
    async fn logout(&self, role: Role, token: Option<&str>) -> Result<(), ApiError>;

    /// Fetches the authoritative profile for a stored token.
    ///
    /// # Errors
    /// Returns the transport, HTTP, or decoding failure.
    async fn fetch_profile(&self, role: Role, token: &str) -> Result<Profile, ApiError>;
}

pub mod endpoints {
    use crate::types::Role;

    pub const STUDENT_LOGIN: &str = "/auth/login";
    pub const STUDENT_REGISTER: &str = "/auth/register";
    pub const STUDENT_LOGOUT: &str = "/auth/logout";
    pub const STUDENT_PROFILE: &str = "/auth/me";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const CHANGE_PASSWORD: &str = "/auth/change-password";
    pub const UPDATE_PROFILE: &str = "/auth/update-profile";

    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const ADMIN_LOGOUT: &str = "/admin/logout";
    pub const ADMIN_PROFILE: &str = "/admin/profile";

    pub fn reset_password(token: &str) -> String {
        format!("/auth/reset-password/{}", token.trim())
    }

    pub const fn login(role: Role) -> &'static str {
        match role {
            Role::Admin => ADMIN_LOGIN,
            Role::Student => STUDENT_LOGIN,
        }
    }

    pub const fn logout(role: Role) -> &'static str {
        match role {
            Role::Admin => ADMIN_LOGOUT,
            Role::Student => STUDENT_LOGOUT,
        }
    }

    pub const fn profile(role: Role) -> &'static str {
        match role {
            Role::Admin => ADMIN_PROFILE,
            Role::Student => STUDENT_PROFILE,
        }
    }
}
