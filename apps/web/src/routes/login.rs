use crate::{
    components::{Alert, AlertKind, AuthCard, Button, Spinner, TextField},
    features::auth::{RouteGuard, state::use_auth},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use portal_auth::{
    Credentials, Role, RouteCategory,
    guard::paths,
    validation::{ValidationError, validate_email},
};

#[derive(Clone)]
struct LoginInput {
    role: Role,
    credentials: Credentials,
}

/// Sign-in for both roles. A successful login flips the session and the
/// public-only guard sends the user to their home.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RouteGuard category=RouteCategory::PublicOnly>
            <LoginForm />
        </RouteGuard>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let role = RwSignal::new(Role::Student);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let store = auth.store();
        let input = input.clone();
        async move { store.login(input.role, &input.credentials).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            error.set(Some(err.message));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        error.set(None);

        let selected = role.get_untracked();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        let checked = if password_value.is_empty() {
            Err(ValidationError::Required("Password"))
        } else if selected == Role::Student {
            validate_email(&email_value)
        } else if email_value.is_empty() {
            Err(ValidationError::Required("Email"))
        } else {
            Ok(())
        };
        if let Err(err) = checked {
            error.set(Some(err.to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            role: selected,
            credentials: Credentials {
                email: email_value,
                password: password_value,
            },
        });
    };

    view! {
        <AuthCard title="Sign in" subtitle="Use your university account.">
            <RoleToggle role=role />
            <form on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@paruluniversity.ac.in"
                />
                <TextField
                    id="password"
                    label="Password"
                    value=password
                    input_type="password"
                    autocomplete="current-password"
                />
                <div class="flex items-center justify-between">
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign In"
                    </Button>
                    <A href=paths::FORGOT_PASSWORD {..} class="text-sm text-blue-600 hover:underline dark:text-blue-400">
                        "Forgot password?"
                    </A>
                </div>
                {move || {
                    login_action
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
            <p class="text-center text-sm text-gray-500 dark:text-gray-400">
                "New here? "
                <A href=paths::REGISTER {..} class="text-blue-600 hover:underline dark:text-blue-400">
                    "Create a student account"
                </A>
            </p>
        </AuthCard>
    }
}

#[component]
fn RoleToggle(role: RwSignal<Role>) -> impl IntoView {
    let option = move |value: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="flex-1 rounded-md px-3 py-1.5 text-sm font-medium transition-colors"
                class:bg-white=move || role.get() == value
                class:shadow-sm=move || role.get() == value
                class:text-gray-500=move || role.get() != value
                aria-pressed=move || (role.get() == value).to_string()
                on:click=move |_| role.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="flex gap-1 rounded-lg bg-gray-100 p-1 dark:bg-gray-800" role="group">
            {option(Role::Student, "Student")}
            {option(Role::Admin, "Admin")}
        </div>
    }
}
