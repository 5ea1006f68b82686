//! Review queues. Both pages list submissions and link each row to its
//! review page; they differ only in which endpoint feeds them.

use crate::{
    components::{PageHeader, SubmissionTable, TableAudience},
    features::{auth::state::use_auth, submissions::client},
};
use leptos::prelude::*;

#[component]
pub fn SubmissionReviewPage() -> impl IntoView {
    let auth = use_auth();
    let submissions = LocalResource::new(move || async move {
        let token = auth.bearer()?;
        client::list_all(&token).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Submission Review" subtitle="Every flag submitted by students." />
            <SubmissionTable
                audience=TableAudience::Admin
                submissions=submissions
                empty_message="No submissions yet."
            />
        </div>
    }
}

#[component]
pub fn PendingSubmissionsPage() -> impl IntoView {
    let auth = use_auth();
    let submissions = LocalResource::new(move || async move {
        let token = auth.bearer()?;
        client::list_pending(&token).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Pending Submissions" subtitle="Flags waiting for a decision." />
            <SubmissionTable
                audience=TableAudience::Admin
                submissions=submissions
                empty_message="Nothing is waiting for review."
            />
        </div>
    }
}
