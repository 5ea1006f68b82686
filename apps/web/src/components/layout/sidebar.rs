//! Side navigation for the signed-in role. Which entries exist and which one
//! is highlighted both come from `portal_auth::nav`.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use portal_auth::{
    Role,
    nav::{self, NavEntry},
};

const LINK_CLASS: &str = "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors";
const ACTIVE_CLASS: &str = "text-blue-600 bg-blue-50 dark:bg-blue-900 dark:text-blue-400";
const IDLE_CLASS: &str = "text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white";

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let pathname = use_location().pathname;
    let entries = nav::entries_for(role);
    let active = Memo::new(move |_| pathname.with(|path| nav::active_flags(entries, path)));
    let section = match role {
        Role::Admin => "Administration",
        Role::Student => "Student",
    };

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6">
                <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                    {section}
                </h3>
                <div class="mt-2 space-y-1">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let is_active = Signal::derive(move || {
                                active.with(|flags| flags.get(index).copied().unwrap_or(false))
                            });
                            view! { <SidebarLink entry=*entry active=is_active /> }
                        })
                        .collect_view()}
                </div>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {build_info::build_label()}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(entry: NavEntry, active: Signal<bool>) -> impl IntoView {
    let class = move || {
        let tone = if active.get() { ACTIVE_CLASS } else { IDLE_CLASS };
        format!("{LINK_CLASS} {tone}")
    };

    view! {
        <A href=entry.target {..} class=class aria-current=move || active.get().then_some("page")>
            <span class="material-symbols-outlined mr-3 text-xl">{entry.icon}</span>
            {entry.label}
        </A>
    }
}
