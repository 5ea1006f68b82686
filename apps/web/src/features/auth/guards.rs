use crate::{components::LoadingScreen, features::auth::state::use_auth};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use portal_auth::{GuardDecision, RouteCategory};

/// Renders `children` only when the session may see this category of route.
/// While the session is resolving it shows a neutral placeholder and never
/// redirects. UX only; the API authorizes every request on its own.
#[component]
pub fn RouteGuard(category: RouteCategory, children: ChildrenFn) -> impl IntoView {
    let session = use_auth().session;
    let navigate = use_navigate();
    let decision = Memo::new(move |_| session.with(|session| category.decide(session)));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            tracing::debug!(?category, to = target, "route guard redirect");
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingScreen /> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
