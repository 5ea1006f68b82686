use crate::{
    components::{DetailRow, PageHeader},
    features::auth::state::use_auth,
};
use leptos::prelude::*;

/// Read-only view of the signed-in administrator.
#[component]
pub fn AdminProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="space-y-6">
            <PageHeader title="Profile" />
            <div class="block rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-4">
                {move || {
                    auth.principal()
                        .map(|profile| {
                            let email = profile.email.clone().unwrap_or_else(|| "-".to_string());
                            view! {
                                <DetailRow label="Name" value=profile.display_name() />
                                <DetailRow label="Email" value=email />
                                <DetailRow label="Role" value="Administrator" />
                            }
                        })
                }}
            </div>
        </div>
    }
}
