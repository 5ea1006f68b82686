use crate::{
    components::{Alert, AlertKind, Button, PageHeader, Spinner, TextField},
    features::{
        auth::state::use_auth,
        challenges::{client, types::Challenge},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_params, params::Params};
use portal_auth::guard::paths;

const SUBMITTED_MESSAGE: &str = "Flag submitted for review.";

#[derive(Params, PartialEq, Clone)]
struct ChallengeParams {
    id: Option<String>,
}

#[component]
pub fn ChallengeDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params::<ChallengeParams>();
    let challenge_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });

    let challenge = LocalResource::new(move || {
        let id = challenge_id.get();
        async move {
            let token = auth.bearer()?;
            client::get_challenge(&token, &id).await
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <PageHeader title="Challenge" />
                <A
                    href=paths::STUDENT_CHALLENGES
                    {..}
                    class="text-sm text-blue-600 hover:underline dark:text-blue-400"
                >
                    "All challenges"
                </A>
            </div>
            {move || match challenge.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Err(err)) => {
                    let message = err.user_message("Could not load this challenge.");
                    view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                }
                Some(Ok(detail)) => view! { <ChallengeBody challenge=detail /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ChallengeBody(challenge: Challenge) -> impl IntoView {
    let auth = use_auth();
    let id = challenge.id.clone();
    let flag = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<(AlertKind, String)>);

    let submit_action = Action::new_local(move |input: &(String, String)| {
        let (id, flag) = input.clone();
        async move {
            let token = auth.bearer()?;
            client::submit_flag(&token, &id, flag).await
        }
    });

    Effect::new(move |_| match submit_action.value().get() {
        Some(Ok(response)) => {
            flag.set(String::new());
            notice.set(Some((
                AlertKind::Success,
                response
                    .message
                    .unwrap_or_else(|| SUBMITTED_MESSAGE.to_string()),
            )));
        }
        Some(Err(err)) => notice.set(Some((
            AlertKind::Error,
            err.user_message("Could not submit the flag."),
        ))),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        notice.set(None);

        let value = flag.get_untracked().trim().to_string();
        if value.is_empty() {
            notice.set(Some((AlertKind::Error, "Enter a flag first.".to_string())));
            return;
        }
        submit_action.dispatch((id.clone(), value));
    };

    let points = challenge.points_label();
    let hints = challenge.hints.clone();

    view! {
        <div class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-4">
            <div class="flex items-start justify-between gap-2">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">{challenge.title}</h2>
                <span class="text-sm font-medium text-blue-600 dark:text-blue-400">{points}</span>
            </div>
            <p class="whitespace-pre-line text-sm text-gray-700 dark:text-gray-200">
                {challenge.description}
            </p>
            {(!hints.is_empty()).then(|| {
                view! {
                    <div>
                        <h3 class="text-sm font-medium text-gray-900 dark:text-white">"Hints"</h3>
                        <ul class="mt-1 list-disc pl-5 text-sm text-gray-600 dark:text-gray-300">
                            {hints.into_iter().map(|hint| view! { <li>{hint}</li> }).collect_view()}
                        </ul>
                    </div>
                }
            })}
            {challenge.solved.then(|| {
                view! { <Alert kind=AlertKind::Info message="You have already solved this challenge." /> }
            })}
        </div>
        <form
            class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800"
            on:submit=on_submit
        >
            <TextField id="flag" label="Flag" value=flag autocomplete="off" placeholder="CTF{...}" />
            <Button button_type="submit" disabled=submit_action.pending()>
                "Submit Flag"
            </Button>
            {move || {
                notice
                    .get()
                    .map(|(kind, message)| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=kind message=message />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
