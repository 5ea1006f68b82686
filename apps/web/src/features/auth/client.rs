//! Auth endpoints over HTTP. Session-changing calls go through `HttpAuthApi`
//! and the session store; the account helpers below leave the session alone.

use crate::app_lib::api::{get_json, patch_json, post_empty, post_json};
use portal_auth::{
    ApiError, AuthApi, AuthResponse, Credentials, Profile, RegisterRequest, Role,
    api::endpoints,
    types::{
        ChangePasswordRequest, ForgotPasswordRequest, MessageResponse, ProfileResponse,
        ResetPasswordRequest, UpdateProfileRequest,
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> Result<AuthResponse, ApiError> {
        post_json(endpoints::login(role), credentials, None).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        post_json(endpoints::STUDENT_REGISTER, request, None).await
    }

    async fn logout(&self, role: Role, token: Option<&str>) -> Result<(), ApiError> {
        post_empty(endpoints::logout(role), token).await
    }

    async fn fetch_profile(&self, role: Role, token: &str) -> Result<Profile, ApiError> {
        get_json::<ProfileResponse>(endpoints::profile(role), Some(token))
            .await
            .map(|response| response.user)
    }
}

/// Requests a password reset email.
pub async fn forgot_password(email: &str) -> Result<MessageResponse, ApiError> {
    let request = ForgotPasswordRequest {
        email: email.trim().to_string(),
    };
    post_json(endpoints::FORGOT_PASSWORD, &request, None).await
}

/// Sets a new password using the token from a reset link.
pub async fn reset_password(
    reset_token: &str,
    new_password: String,
) -> Result<MessageResponse, ApiError> {
    if reset_token.trim().is_empty() {
        return Err(ApiError::Config(
            "This reset link is incomplete. Request a new one.".to_string(),
        ));
    }
    let request = ResetPasswordRequest { new_password };
    post_json(&endpoints::reset_password(reset_token), &request, None).await
}

pub async fn change_password(
    token: &str,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse, ApiError> {
    patch_json(endpoints::CHANGE_PASSWORD, request, Some(token)).await
}

/// Saves profile edits and returns the updated profile.
pub async fn update_profile(
    token: &str,
    request: &UpdateProfileRequest,
) -> Result<Profile, ApiError> {
    patch_json::<_, ProfileResponse>(endpoints::UPDATE_PROFILE, request, Some(token))
        .await
        .map(|response| response.user)
}
