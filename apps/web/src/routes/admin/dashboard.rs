use crate::{
    components::{Alert, AlertKind, PageHeader, Spinner, StatCard},
    features::{
        auth::state::use_auth,
        submissions::{client, types::SubmissionTally},
    },
};
use leptos::prelude::*;
use leptos_router::components::A;
use portal_auth::guard::paths;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let tally = LocalResource::new(move || async move {
        let token = auth.bearer()?;
        client::list_all(&token)
            .await
            .map(|submissions| SubmissionTally::of(&submissions))
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Dashboard" subtitle="Submission activity across all challenges." />
            {move || match tally.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Err(err)) => {
                    let message = err.user_message("Could not load submission stats.");
                    view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                }
                Some(Ok(tally)) => {
                    view! {
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                            <StatCard label="Total submissions" value=tally.total />
                            <StatCard label="Pending" value=tally.pending />
                            <StatCard label="Approved" value=tally.approved />
                            <StatCard label="Rejected" value=tally.rejected />
                        </div>
                        {(tally.pending > 0).then(|| {
                            view! {
                                <A
                                    href=paths::ADMIN_PENDING_SUBMISSIONS
                                    {..}
                                    class="inline-block text-sm font-medium text-blue-600 hover:underline dark:text-blue-400"
                                >
                                    "Review pending submissions"
                                </A>
                            }
                        })}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
