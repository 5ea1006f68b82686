use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}

/// Neutral full-page placeholder shown while the session is resolving. Greets
/// a returning user from the cached profile; no chrome, no redirects.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let greeting = use_auth()
        .principal()
        .map(|profile| format!("Welcome back, {}", profile.display_name()));

    view! {
        <div class="flex flex-col gap-4 justify-center items-center min-h-screen">
            <Spinner />
            {greeting.map(|text| {
                view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
            })}
        </div>
    }
}
