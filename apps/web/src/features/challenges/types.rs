use crate::features::submissions::types::Submission;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Set by the API when the signed-in student already has an approved flag.
    #[serde(default)]
    pub solved: bool,
}

impl Challenge {
    pub fn points_label(&self) -> String {
        self.points
            .map_or_else(|| "-".to_string(), |points| format!("{points} pts"))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChallengesResponse {
    #[serde(default)]
    pub challenges: Vec<Challenge>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChallengeResponse {
    pub challenge: Challenge,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmitFlagRequest {
    pub flag: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubmitFlagResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub submission: Option<Submission>,
}
