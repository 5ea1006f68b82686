use crate::{
    components::{Alert, AlertKind, PageHeader, Spinner},
    features::{
        auth::state::use_auth,
        challenges::{client, types::Challenge},
    },
};
use leptos::prelude::*;
use leptos_router::components::A;
use portal_auth::guard::paths;

#[component]
pub fn ChallengesPage() -> impl IntoView {
    let auth = use_auth();
    let challenges = LocalResource::new(move || async move {
        let token = auth.bearer()?;
        client::list_challenges(&token).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Challenges" subtitle="Pick a challenge and submit its flag for review." />
            {move || match challenges.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Err(err)) => {
                    let message = err.user_message("Could not load challenges.");
                    view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "No challenges are open right now."
                        </p>
                    }
                    .into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-3">
                            {list
                                .into_iter()
                                .map(|challenge| view! { <ChallengeCard challenge=challenge /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ChallengeCard(challenge: Challenge) -> impl IntoView {
    let href = paths::student_challenge(&challenge.id);
    let points = challenge.points_label();
    let meta = [challenge.category.clone(), challenge.difficulty.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <A
            href=href
            {..}
            class="block rounded-lg border border-gray-200 bg-white p-5 shadow-sm transition-colors hover:border-blue-400 dark:border-gray-700 dark:bg-gray-800"
        >
            <div class="flex items-start justify-between gap-2">
                <h2 class="font-semibold text-gray-900 dark:text-white">{challenge.title}</h2>
                <span class="text-sm font-medium text-blue-600 dark:text-blue-400">{points}</span>
            </div>
            <p class="mt-1 text-xs uppercase tracking-wide text-gray-500 dark:text-gray-400">{meta}</p>
            {challenge.solved.then(|| {
                view! {
                    <span class="mt-3 inline-flex rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800">
                        "Solved"
                    </span>
                }
            })}
        </A>
    }
}
