use crate::{
    components::{Alert, AlertKind, AuthCard, Button, Spinner, TextField},
    features::auth::{RouteGuard, state::use_auth},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use portal_auth::{
    RegisterRequest, RouteCategory, guard::paths, validation::validate_registration,
};

/// Student self-registration. Success signs the new student in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <RouteGuard category=RouteCategory::PublicOnly>
            <RegisterForm />
        </RouteGuard>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let contact_number = RwSignal::new(String::new());
    let erp_number = RwSignal::new(String::new());
    let college_name = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());
    let sem = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let store = auth.store();
        let request = request.clone();
        async move { store.register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = register_action.value().get() {
            error.set(Some(err.message));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        error.set(None);

        let field = |signal: RwSignal<String>| signal.get_untracked().trim().to_string();
        let request = RegisterRequest {
            full_name: field(full_name),
            email: field(email),
            password: password.get_untracked(),
            contact_number: field(contact_number),
            specialization: field(specialization),
            sem: field(sem),
            erp_number: field(erp_number),
            college_name: field(college_name),
        };
        if let Err(err) = validate_registration(&request, &confirm.get_untracked()) {
            error.set(Some(err.to_string()));
            return;
        }

        register_action.dispatch(request);
    };

    view! {
        <AuthCard title="Create account" subtitle="Students register with their university email.">
            <form on:submit=on_submit>
                <TextField id="full-name" label="Full name" value=full_name autocomplete="name" />
                <TextField
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@paruluniversity.ac.in"
                />
                <TextField
                    id="contact-number"
                    label="Contact number"
                    value=contact_number
                    input_type="tel"
                    autocomplete="tel"
                />
                <div class="grid grid-cols-2 gap-4">
                    <TextField id="erp-number" label="ERP number" value=erp_number />
                    <TextField id="sem" label="Semester" value=sem />
                </div>
                <TextField id="college-name" label="College name" value=college_name />
                <TextField id="specialization" label="Specialization" value=specialization />
                <TextField
                    id="password"
                    label="Password"
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
                <Button button_type="submit" disabled=register_action.pending()>
                    "Register"
                </Button>
                {move || {
                    register_action
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
                "Already registered? "
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                    "Sign in"
                </A>
            </p>
        </AuthCard>
    }
}
