use portal_auth::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::Rejected => "Rejected",
            SubmissionStatus::Unknown => "Unknown",
        }
    }

    pub const fn is_reviewed(self) -> bool {
        matches!(self, SubmissionStatus::Approved | SubmissionStatus::Rejected)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// A reference the API returns either populated or as a bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linked<T> {
    Populated(T),
    Id(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSummary {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub points: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub challenge: Option<Linked<ChallengeSummary>>,
    #[serde(default)]
    pub user: Option<Linked<Profile>>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

impl Submission {
    pub fn challenge_title(&self) -> String {
        match &self.challenge {
            Some(Linked::Populated(challenge)) if !challenge.title.trim().is_empty() => {
                challenge.title.clone()
            }
            Some(Linked::Populated(_)) | None => "Unknown challenge".to_string(),
            Some(Linked::Id(id)) => format!("Challenge {id}"),
        }
    }

    pub fn submitter(&self) -> String {
        match &self.user {
            Some(Linked::Populated(profile)) => profile.display_name(),
            Some(Linked::Id(id)) => format!("User {id}"),
            None => "Unknown user".to_string(),
        }
    }

    /// Submission date without the time part, when the API sent one.
    pub fn submitted_on(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(|stamp| stamp.split('T').next())
            .filter(|date| !date.is_empty())
            .unwrap_or("-")
            .to_string()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubmissionsResponse {
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubmissionResponse {
    pub submission: Submission,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReviewRequest {
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Counts shown on the dashboards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionTally {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl SubmissionTally {
    pub fn of(submissions: &[Submission]) -> Self {
        submissions
            .iter()
            .fold(Self::default(), |mut tally, submission| {
                tally.total += 1;
                match submission.status {
                    SubmissionStatus::Pending => tally.pending += 1,
                    SubmissionStatus::Approved => tally.approved += 1,
                    SubmissionStatus::Rejected => tally.rejected += 1,
                    SubmissionStatus::Unknown => {}
                }
                tally
            })
    }
}
