use crate::{
    components::{PageHeader, SubmissionTable, TableAudience},
    features::{auth::state::use_auth, submissions::client},
};
use leptos::prelude::*;

#[component]
pub fn MySubmissionsPage() -> impl IntoView {
    let auth = use_auth();
    let submissions = LocalResource::new(move || async move {
        let token = auth.bearer()?;
        client::list_own(&token).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="My Submissions" subtitle="Every flag you have submitted and its review." />
            <SubmissionTable
                audience=TableAudience::Student
                submissions=submissions
                empty_message="You have not submitted any flags yet."
            />
        </div>
    }
}
