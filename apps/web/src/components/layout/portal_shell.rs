use crate::{components::layout::Sidebar, features::auth::state::use_auth};
use leptos::prelude::*;
use portal_auth::Role;

/// Signed-in chrome: header with the principal and sign-out, sidebar, content.
#[component]
pub fn PortalShell(role: Role, children: Children) -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let display_name = move || {
        session.with(|session| {
            session
                .principal()
                .map_or_else(String::new, portal_auth::Profile::display_name)
        })
    };
    let role_label = match role {
        Role::Admin => "Administrator",
        Role::Student => "Student",
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
                <div class="flex items-center justify-between px-6 py-3">
                    <a href=role.home_path() class="font-semibold whitespace-nowrap dark:text-white">
                        "CTF Portal"
                    </a>
                    <div class="flex items-center gap-4">
                        <div class="text-right">
                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                {display_name}
                            </p>
                            <p class="text-xs text-gray-500 dark:text-gray-400">{role_label}</p>
                        </div>
                        <button
                            type="button"
                            class="rounded-lg border border-gray-300 px-3 py-1.5 text-sm text-gray-700 hover:bg-gray-100 dark:border-gray-600 dark:text-gray-200 dark:hover:bg-gray-800"
                            on:click=move |_| auth.logout()
                        >
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <Sidebar role=role />
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}
