use crate::{
    components::{Alert, AlertKind, AuthCard, Button, Spinner, TextField},
    features::auth::{RouteGuard, client},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use portal_auth::{RouteCategory, guard::paths, validation::validate_email};

const SENT_MESSAGE: &str = "If that account exists, a reset link is on its way.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <RouteGuard category=RouteCategory::PublicOnly>
            <ForgotPasswordForm />
        </RouteGuard>
    }
}

#[component]
fn ForgotPasswordForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);

    let request_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::forgot_password(&email).await }
    });

    Effect::new(move |_| match request_action.value().get() {
        Some(Ok(response)) => {
            sent.set(Some(
                response.message.unwrap_or_else(|| SENT_MESSAGE.to_string()),
            ));
        }
        Some(Err(err)) => error.set(Some(err.user_message("Could not send the reset link."))),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        error.set(None);
        sent.set(None);

        let email_value = email.get_untracked();
        if let Err(err) = validate_email(&email_value) {
            error.set(Some(err.to_string()));
            return;
        }
        request_action.dispatch(email_value.trim().to_string());
    };

    view! {
        <AuthCard title="Reset password" subtitle="We will email you a link to choose a new one.">
            <form on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@paruluniversity.ac.in"
                />
                <Button button_type="submit" disabled=request_action.pending()>
                    "Send Reset Link"
                </Button>
                {move || {
                    request_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    sent.get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
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
            <p class="text-center text-sm">
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                    "Back to sign in"
                </A>
            </p>
        </AuthCard>
    }
}
