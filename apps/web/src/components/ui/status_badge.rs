use crate::features::submissions::types::SubmissionStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(status: SubmissionStatus) -> impl IntoView {
    let tone = match status {
        SubmissionStatus::Pending => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900/40 dark:text-amber-200"
        }
        SubmissionStatus::Approved => {
            "bg-emerald-100 text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200"
        }
        SubmissionStatus::Rejected => "bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-200",
        SubmissionStatus::Unknown => "bg-gray-100 text-gray-700 dark:bg-gray-800 dark:text-gray-300",
    };

    view! {
        <span class=format!("inline-flex rounded-full px-2.5 py-0.5 text-xs font-medium {tone}")>
            {status.label()}
        </span>
    }
}
