use crate::{components::layout::PortalShell, features::auth::RouteGuard};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use portal_auth::{RouteCategory, Role};

/// Parent route for `/admin/*`.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RouteGuard category=RouteCategory::AdminOnly>
            <PortalShell role=Role::Admin>
                <Outlet />
            </PortalShell>
        </RouteGuard>
    }
}

/// Parent route for `/student/*`.
#[component]
pub fn StudentLayout() -> impl IntoView {
    view! {
        <RouteGuard category=RouteCategory::StudentOnly>
            <PortalShell role=Role::Student>
                <Outlet />
            </PortalShell>
        </RouteGuard>
    }
}
