mod dashboard;
mod profile;
mod submission_detail;
mod submissions;

pub(crate) use dashboard::AdminDashboardPage;
pub(crate) use profile::AdminProfilePage;
pub(crate) use submission_detail::SubmissionDetailPage;
pub(crate) use submissions::{PendingSubmissionsPage, SubmissionReviewPage};
