use crate::{
    components::{
        Alert, AlertKind, Button, ButtonVariant, DetailRow, PageHeader, Spinner, StatusBadge,
    },
    features::{
        auth::state::use_auth,
        submissions::{
            client,
            types::{Submission, SubmissionStatus},
        },
    },
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params, params::Params};
use portal_auth::guard::paths;

#[derive(Params, PartialEq, Clone)]
struct SubmissionParams {
    id: Option<String>,
}

#[derive(Clone)]
struct ReviewInput {
    id: String,
    status: SubmissionStatus,
    feedback: String,
}

#[component]
pub fn SubmissionDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params::<SubmissionParams>();
    let submission_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });

    let submission = LocalResource::new(move || {
        let id = submission_id.get();
        async move {
            let token = auth.bearer()?;
            client::get_submission(&token, &id).await
        }
    });

    let feedback = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<(AlertKind, String)>);

    let review_action = Action::new_local(move |input: &ReviewInput| {
        let input = input.clone();
        async move {
            let token = auth.bearer()?;
            client::review(&token, &input.id, input.status, &input.feedback).await
        }
    });

    Effect::new(move |_| match review_action.value().get() {
        Some(Ok(reviewed)) => {
            tracing::info!(status = %reviewed.status, "submission reviewed");
            notice.set(Some((
                AlertKind::Success,
                format!("Submission marked {}.", reviewed.status.label().to_lowercase()),
            )));
            submission.refetch();
        }
        Some(Err(err)) => notice.set(Some((
            AlertKind::Error,
            err.user_message("Could not save the review."),
        ))),
        None => {}
    });

    let decide = move |status: SubmissionStatus| {
        notice.set(None);
        review_action.dispatch(ReviewInput {
            id: submission_id.get_untracked(),
            status,
            feedback: feedback.get_untracked(),
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <PageHeader title="Review Submission" />
                <A
                    href=paths::ADMIN_SUBMISSIONS
                    {..}
                    class="text-sm text-blue-600 hover:underline dark:text-blue-400"
                >
                    "Back to submissions"
                </A>
            </div>
            {move || match submission.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Err(err)) => {
                    let message = err.user_message("Could not load this submission.");
                    view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                }
                Some(Ok(detail)) => view! { <SubmissionSummary submission=detail /> }.into_any(),
            }}
            <div class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-4">
                <label
                    class="block text-sm font-medium text-gray-900 dark:text-white"
                    for="feedback"
                >
                    "Feedback"
                </label>
                <textarea
                    id="feedback"
                    rows="3"
                    class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    placeholder="Optional note for the student"
                    prop:value=move || feedback.get()
                    on:input=move |event| feedback.set(event_target_value(&event))
                ></textarea>
                <div class="flex gap-3">
                    <Button
                        variant=ButtonVariant::Approve
                        disabled=review_action.pending()
                        on_click=Callback::new(move |()| decide(SubmissionStatus::Approved))
                    >
                        "Approve"
                    </Button>
                    <Button
                        variant=ButtonVariant::Reject
                        disabled=review_action.pending()
                        on_click=Callback::new(move |()| decide(SubmissionStatus::Rejected))
                    >
                        "Reject"
                    </Button>
                </div>
                {move || {
                    notice
                        .get()
                        .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
                }}
            </div>
        </div>
    }
}

#[component]
fn SubmissionSummary(submission: Submission) -> impl IntoView {
    let flag = submission.flag.clone().unwrap_or_else(|| "-".to_string());
    let feedback = submission
        .feedback
        .clone()
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                    {submission.challenge_title()}
                </h2>
                <StatusBadge status=submission.status />
            </div>
            <DetailRow label="Student" value=submission.submitter() />
            <DetailRow label="Submitted" value=submission.submitted_on() />
            <DetailRow label="Flag" value=flag />
            <DetailRow label="Feedback" value=feedback />
        </div>
    }
}
