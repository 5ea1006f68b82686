//! Submission endpoints. Students read their own history; admins read and
//! review everyone's.

use crate::{
    app_lib::api::{get_json, patch_json},
    features::submissions::types::{
        ReviewRequest, Submission, SubmissionResponse, SubmissionStatus, SubmissionsResponse,
    },
};
use portal_auth::ApiError;

const OWN_SUBMISSIONS: &str = "/user/submissions";
const ALL_SUBMISSIONS: &str = "/admin/submissions";
const PENDING_SUBMISSIONS: &str = "/admin/submissions/pending";

pub async fn list_own(token: &str) -> Result<Vec<Submission>, ApiError> {
    list(OWN_SUBMISSIONS, token).await
}

pub async fn list_all(token: &str) -> Result<Vec<Submission>, ApiError> {
    list(ALL_SUBMISSIONS, token).await
}

pub async fn list_pending(token: &str) -> Result<Vec<Submission>, ApiError> {
    list(PENDING_SUBMISSIONS, token).await
}

pub async fn get_submission(token: &str, id: &str) -> Result<Submission, ApiError> {
    let id = require_id(id)?;
    get_json::<SubmissionResponse>(&format!("{ALL_SUBMISSIONS}/{id}"), Some(token))
        .await
        .map(|response| response.submission)
}

/// Approves or rejects a submission. Blank feedback is sent as absent.
pub async fn review(
    token: &str,
    id: &str,
    status: SubmissionStatus,
    feedback: &str,
) -> Result<Submission, ApiError> {
    let id = require_id(id)?;
    let feedback = feedback.trim();
    let request = ReviewRequest {
        status,
        feedback: (!feedback.is_empty()).then(|| feedback.to_string()),
    };
    patch_json::<_, SubmissionResponse>(
        &format!("{ALL_SUBMISSIONS}/{id}/review"),
        &request,
        Some(token),
    )
    .await
    .map(|response| response.submission)
}

async fn list(path: &str, token: &str) -> Result<Vec<Submission>, ApiError> {
    get_json::<SubmissionsResponse>(path, Some(token))
        .await
        .map(|response| response.submissions)
}

fn require_id(id: &str) -> Result<&str, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(ApiError::Config("Submission id is required.".to_string()))
    } else {
        Ok(trimmed)
    }
}
