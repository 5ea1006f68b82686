mod challenge_detail;
mod challenges;
mod dashboard;
mod profile;
mod submissions;

pub(crate) use challenge_detail::ChallengeDetailPage;
pub(crate) use challenges::ChallengesPage;
pub(crate) use dashboard::StudentDashboardPage;
pub(crate) use profile::StudentProfilePage;
pub(crate) use submissions::MySubmissionsPage;
