//! Submission listing shared by the admin review queues and the student
//! history. Admin rows link to the review page; student rows show feedback.

use crate::{
    components::{Alert, AlertKind, Spinner, StatusBadge},
    features::submissions::types::Submission,
};
use leptos::prelude::*;
use leptos_router::components::A;
use portal_auth::{ApiError, guard::paths};

const HEADER_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableAudience {
    Admin,
    Student,
}

impl TableAudience {
    const fn headers(self) -> [&'static str; 4] {
        match self {
            TableAudience::Admin => ["Challenge", "Student", "Submitted", "Status"],
            TableAudience::Student => ["Challenge", "Submitted", "Status", "Feedback"],
        }
    }
}

#[component]
pub fn SubmissionTable(
    audience: TableAudience,
    submissions: LocalResource<Result<Vec<Submission>, ApiError>>,
    empty_message: &'static str,
) -> impl IntoView {
    let columns = audience.headers().len().to_string();
    let placeholder = move |content: AnyView| {
        let columns = columns.clone();
        view! {
            <tr>
                <td colspan=columns class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                    {content}
                </td>
            </tr>
        }
        .into_any()
    };

    view! {
        <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        {audience
                            .headers()
                            .into_iter()
                            .map(|header| view! { <th scope="col" class=HEADER_CLASS>{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    {move || match submissions.get() {
                        None => placeholder(view! { <Spinner /> }.into_any()),
                        Some(Err(err)) => {
                            let message = err.user_message("Could not load submissions.");
                            placeholder(
                                view! { <Alert kind=AlertKind::Error message=message /> }.into_any(),
                            )
                        }
                        Some(Ok(list)) if list.is_empty() => placeholder(empty_message.into_any()),
                        Some(Ok(list)) => {
                            list.into_iter()
                                .map(|submission| {
                                    view! { <SubmissionRow audience=audience submission=submission /> }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SubmissionRow(audience: TableAudience, submission: Submission) -> impl IntoView {
    let title = submission.challenge_title();
    let submitted = submission.submitted_on();
    let status = submission.status;

    match audience {
        TableAudience::Admin => {
            let href = paths::admin_submission(&submission.id);
            view! {
                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                        <A
                            href=href
                            {..}
                            class="text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                        >
                            {title}
                        </A>
                    </td>
                    <td class=CELL_CLASS>{submission.submitter()}</td>
                    <td class=CELL_CLASS>{submitted}</td>
                    <td class=CELL_CLASS><StatusBadge status=status /></td>
                </tr>
            }
            .into_any()
        }
        TableAudience::Student => {
            let feedback = submission.feedback.unwrap_or_else(|| "-".to_string());
            view! {
                <tr>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                        {title}
                    </td>
                    <td class=CELL_CLASS>{submitted}</td>
                    <td class=CELL_CLASS><StatusBadge status=status /></td>
                    <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">{feedback}</td>
                </tr>
            }
            .into_any()
        }
    }
}
