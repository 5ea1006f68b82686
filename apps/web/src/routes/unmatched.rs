use leptos::prelude::*;
use leptos_router::{components::Redirect, hooks::use_location};
use portal_auth::{
    PathClass, RouteCategory,
    guard::{category_for_path, paths},
};

/// Unknown paths inside a role subtree land on that role's home, where the
/// guard takes over. Everything else goes to the login view.
#[component]
pub fn UnmatchedRoute() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    let target = match category_for_path(&pathname) {
        PathClass::Guarded(RouteCategory::AdminOnly) => paths::ADMIN_HOME,
        PathClass::Guarded(RouteCategory::StudentOnly) => paths::STUDENT_HOME,
        PathClass::Guarded(RouteCategory::PublicOnly)
        | PathClass::Unguarded
        | PathClass::ToLogin => paths::LOGIN,
    };
    tracing::debug!(path = %pathname, to = target, "unmatched route");

    view! { <Redirect path=target /> }
}
