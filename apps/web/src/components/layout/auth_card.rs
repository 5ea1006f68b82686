use leptos::prelude::*;

/// Centered card for the signed-out pages.
#[component]
pub fn AuthCard(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center px-4 py-12">
            <div class="w-full max-w-md space-y-6 rounded-xl border border-gray-200 bg-white p-8 shadow-sm dark:border-gray-800 dark:bg-gray-900">
                <div class="space-y-1 text-center">
                    <p class="text-xs font-semibold uppercase tracking-widest text-blue-600 dark:text-blue-400">
                        "CTF Portal"
                    </p>
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
                    {subtitle.map(|text| {
                        view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
                    })}
                </div>
                {children()}
            </div>
        </div>
    }
}
