//! Student landing page: progress across challenges and the review state of
//! their own submissions.

use crate::{
    components::{Alert, AlertKind, PageHeader, Spinner, StatCard},
    features::{
        auth::state::use_auth,
        challenges::client as challenges,
        submissions::{client as submissions, types::SubmissionTally},
    },
};
use leptos::prelude::*;
use leptos_router::components::A;
use portal_auth::{ApiError, guard::paths};

#[derive(Clone, Copy)]
struct Progress {
    challenges: usize,
    solved: usize,
    tally: SubmissionTally,
}

async fn load_progress(token: String) -> Result<Progress, ApiError> {
    let listed = challenges::list_challenges(&token).await?;
    let own = submissions::list_own(&token).await?;
    Ok(Progress {
        challenges: listed.len(),
        solved: listed.iter().filter(|challenge| challenge.solved).count(),
        tally: SubmissionTally::of(&own),
    })
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let progress = LocalResource::new(move || async move { load_progress(auth.bearer()?).await });
    let greeting = move || {
        auth.principal()
            .map(|profile| format!("Welcome, {}", profile.display_name()))
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Dashboard" />
            <p class="text-sm text-gray-600 dark:text-gray-300">{greeting}</p>
            {move || match progress.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Err(err)) => {
                    let message = err.user_message("Could not load your progress.");
                    view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                }
                Some(Ok(progress)) => {
                    view! {
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                            <StatCard label="Challenges" value=progress.challenges />
                            <StatCard label="Solved" value=progress.solved />
                            <StatCard label="Pending review" value=progress.tally.pending />
                            <StatCard label="Rejected" value=progress.tally.rejected />
                        </div>
                        <A
                            href=paths::STUDENT_CHALLENGES
                            {..}
                            class="inline-block text-sm font-medium text-blue-600 hover:underline dark:text-blue-400"
                        >
                            "Browse challenges"
                        </A>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
