//! Challenge endpoints under the student namespace. All calls need the
//! student's bearer token.

use crate::{
    app_lib::api::{get_json, post_json},
    features::challenges::types::{
        Challenge, ChallengeResponse, ChallengesResponse, SubmitFlagRequest, SubmitFlagResponse,
    },
};
use portal_auth::ApiError;

const CHALLENGES: &str = "/user/challenges";

pub async fn list_challenges(token: &str) -> Result<Vec<Challenge>, ApiError> {
    get_json::<ChallengesResponse>(CHALLENGES, Some(token))
        .await
        .map(|response| response.challenges)
}

pub async fn get_challenge(token: &str, id: &str) -> Result<Challenge, ApiError> {
    let id = require_id(id)?;
    get_json::<ChallengeResponse>(&format!("{CHALLENGES}/{id}"), Some(token))
        .await
        .map(|response| response.challenge)
}

/// Submits a flag for review. Flags are compared server-side only.
pub async fn submit_flag(
    token: &str,
    id: &str,
    flag: String,
) -> Result<SubmitFlagResponse, ApiError> {
    let id = require_id(id)?;
    let request = SubmitFlagRequest { flag };
    post_json(&format!("{CHALLENGES}/{id}/submit"), &request, Some(token)).await
}

fn require_id(id: &str) -> Result<&str, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(ApiError::Config("Challenge id is required.".to_string()))
    } else {
        Ok(trimmed)
    }
}
