//! Landing page for emailed reset links. Reachable whatever the session state,
//! so a signed-in user can still follow a link they requested earlier.

use crate::{
    components::{Alert, AlertKind, AuthCard, Button, Spinner, TextField},
    features::auth::client,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_params, params::Params};
use portal_auth::{guard::paths, validation::validate_new_password};

#[derive(Params, PartialEq, Clone)]
struct ResetParams {
    token: Option<String>,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params::<ResetParams>();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);

    let reset_action = Action::new_local(move |input: &(String, String)| {
        let (reset_token, new_password) = input.clone();
        async move { client::reset_password(&reset_token, new_password).await }
    });

    Effect::new(move |_| match reset_action.value().get() {
        Some(Ok(_)) => done.set(true),
        Some(Err(err)) => error.set(Some(
            err.user_message("This reset link is invalid or has expired."),
        )),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        error.set(None);

        let new_password = password.get_untracked();
        if let Err(err) = validate_new_password(&new_password, &confirm.get_untracked()) {
            error.set(Some(err.to_string()));
            return;
        }
        let reset_token = params
            .get_untracked()
            .ok()
            .and_then(|params| params.token)
            .unwrap_or_default();
        reset_action.dispatch((reset_token, new_password));
    };

    view! {
        <AuthCard title="Choose a new password">
            <Show
                when=move || done.get()
                fallback=move || {
                    view! {
                        <form on:submit=on_submit>
                            <TextField
                                id="password"
                                label="New password"
                                value=password
                                input_type="password"
                                autocomplete="new-password"
                                hint="At least 8 characters with upper and lower case letters, a number and one of @$!%*?&"
                            />
                            <TextField
                                id="confirm-password"
                                label="Confirm password"
                                value=confirm
                                input_type="password"
                                autocomplete="new-password"
                            />
                            <Button button_type="submit" disabled=reset_action.pending()>
                                "Update Password"
                            </Button>
                            {move || {
                                reset_action
                                    .pending()
                                    .get()
                                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
                            }}
                            {move || {
                                error
                                    .get()
                                    .map(|message| {
                                        view! {
                                            <div class="mt-4">
                                                <Alert kind=AlertKind::Error message=message />
                                            </div>
                                        }
                                    })
                            }}
                        </form>
                    }
                }
            >
                <Alert kind=AlertKind::Success message="Your password has been updated." />
            </Show>
            <p class="text-center text-sm">
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                    "Back to sign in"
                </A>
            </p>
        </AuthCard>
    }
}
