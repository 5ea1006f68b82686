use leptos::prelude::*;

#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
            {subtitle.map(|text| {
                view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
            })}
        </div>
    }
}

/// Single headline number on a dashboard.
#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
            <p class="mt-1 text-3xl font-semibold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}

/// Label and value pair used on detail and profile pages.
#[component]
pub fn DetailRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <span class="block text-sm font-medium text-gray-500 dark:text-gray-300">{label}</span>
            <div class="text-gray-900 dark:text-white break-words">{value}</div>
        </div>
    }
}
