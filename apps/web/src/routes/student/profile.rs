//! Student profile: edit the mutable fields and change the password. Saved
//! edits replace the session principal so the header updates immediately.

use crate::{
    components::{Alert, AlertKind, Button, DetailRow, PageHeader, Spinner, TextField},
    features::auth::{client, state::use_auth},
};
use leptos::{ev::SubmitEvent, prelude::*};
use portal_auth::{
    Profile,
    types::{ChangePasswordRequest, UpdateProfileRequest},
    validation::{ValidationError, validate_new_password},
};

type Notice = RwSignal<Option<(AlertKind, String)>>;

#[component]
pub fn StudentProfilePage() -> impl IntoView {
    let auth = use_auth();
    let principal = auth.principal().unwrap_or_default();
    let email = principal.email.clone().unwrap_or_else(|| "-".to_string());
    let erp_number = principal
        .text_field("erpNumber")
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="space-y-6">
            <PageHeader title="Profile" />
            <div class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 grid grid-cols-1 gap-4 sm:grid-cols-2">
                <DetailRow label="Email" value=email />
                <DetailRow label="ERP number" value=erp_number />
            </div>
            <ProfileForm principal=principal />
            <PasswordForm />
        </div>
    }
}

#[component]
fn ProfileForm(principal: Profile) -> impl IntoView {
    let auth = use_auth();
    let text = |key: &str| RwSignal::new(principal.text_field(key).unwrap_or_default());
    let full_name = RwSignal::new(principal.full_name.clone().unwrap_or_default());
    let contact_number = text("contactNumber");
    let specialization = text("specialization");
    let sem = text("sem");
    let college_name = text("collegeName");
    let notice: Notice = RwSignal::new(None);

    let save_action = Action::new_local(move |request: &UpdateProfileRequest| {
        let request = request.clone();
        async move {
            let token = auth.bearer()?;
            client::update_profile(&token, &request).await
        }
    });

    Effect::new(move |_| match save_action.value().get() {
        Some(Ok(profile)) => {
            auth.store().replace_principal(profile);
            notice.set(Some((AlertKind::Success, "Profile saved.".to_string())));
        }
        Some(Err(err)) => notice.set(Some((
            AlertKind::Error,
            err.user_message("Could not save your profile."),
        ))),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        notice.set(None);

        let request = UpdateProfileRequest::from_form(
            &full_name.get_untracked(),
            &contact_number.get_untracked(),
            &specialization.get_untracked(),
            &sem.get_untracked(),
            &college_name.get_untracked(),
        );
        if request.full_name.is_none() {
            notice.set(Some((
                AlertKind::Error,
                ValidationError::Required("Full name").to_string(),
            )));
            return;
        }
        save_action.dispatch(request);
    };

    view! {
        <form
            class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800"
            on:submit=on_submit
        >
            <h2 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">"Details"</h2>
            <TextField id="full-name" label="Full name" value=full_name autocomplete="name" />
            <TextField id="contact-number" label="Contact number" value=contact_number input_type="tel" />
            <div class="grid grid-cols-2 gap-4">
                <TextField id="sem" label="Semester" value=sem />
                <TextField id="specialization" label="Specialization" value=specialization />
            </div>
            <TextField id="college-name" label="College name" value=college_name />
            <Button button_type="submit" disabled=save_action.pending()>
                "Save Profile"
            </Button>
            <FormStatus pending=save_action.pending() notice=notice />
        </form>
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let auth = use_auth();
    let current = RwSignal::new(String::new());
    let next = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let notice: Notice = RwSignal::new(None);

    let change_action = Action::new_local(move |request: &ChangePasswordRequest| {
        let request = request.clone();
        async move {
            let token = auth.bearer()?;
            client::change_password(&token, &request).await
        }
    });

    Effect::new(move |_| match change_action.value().get() {
        Some(Ok(response)) => {
            for field in [current, next, confirm] {
                field.set(String::new());
            }
            notice.set(Some((
                AlertKind::Success,
                response
                    .message
                    .unwrap_or_else(|| "Password changed.".to_string()),
            )));
        }
        Some(Err(err)) => notice.set(Some((
            AlertKind::Error,
            err.user_message("Could not change your password."),
        ))),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        notice.set(None);

        let current_password = current.get_untracked();
        let new_password = next.get_untracked();
        let checked = if current_password.is_empty() {
            Err(ValidationError::Required("Current password"))
        } else {
            validate_new_password(&new_password, &confirm.get_untracked())
        };
        if let Err(err) = checked {
            notice.set(Some((AlertKind::Error, err.to_string())));
            return;
        }

        change_action.dispatch(ChangePasswordRequest {
            current_password,
            new_password,
        });
    };

    view! {
        <form
            class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800"
            on:submit=on_submit
        >
            <h2 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">"Change Password"</h2>
            <TextField
                id="current-password"
                label="Current password"
                value=current
                input_type="password"
                autocomplete="current-password"
            />
            <TextField
                id="new-password"
                label="New password"
                value=next
                input_type="password"
                autocomplete="new-password"
                hint="At least 8 characters with upper and lower case letters, a number and one of @$!%*?&"
            />
            <TextField
                id="confirm-password"
                label="Confirm new password"
                value=confirm
                input_type="password"
                autocomplete="new-password"
            />
            <Button button_type="submit" disabled=change_action.pending()>
                "Change Password"
            </Button>
            <FormStatus pending=change_action.pending() notice=notice />
        </form>
    }
}

#[component]
fn FormStatus(#[prop(into)] pending: Signal<bool>, notice: Notice) -> impl IntoView {
    view! {
        {move || pending.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
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
    }
}
