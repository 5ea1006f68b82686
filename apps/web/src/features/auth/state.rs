//! Session context for the app. `AuthProvider` builds the one `SessionStore`,
//! mirrors every store transition into a signal and starts restoration once
//! on mount. Views read the signal; only store operations change it.

use crate::features::auth::{BrowserStorage, client::HttpAuthApi};
use leptos::{prelude::*, task::spawn_local};
use portal_auth::{ApiError, Profile, Role, Session, SessionStore};
use std::rc::Rc;

pub type PortalSession = SessionStore<HttpAuthApi, BrowserStorage>;

const SESSION_ENDED: &str = "Your session has ended. Please sign in again.";

/// Auth session context shared through Leptos.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    pub role: Signal<Option<Role>>,
    store: StoredValue<Rc<PortalSession>, LocalStorage>,
}

impl AuthContext {
    fn new(store: Rc<PortalSession>, session: RwSignal<Session>) -> Self {
        Self {
            session,
            is_authenticated: Signal::derive(move || session.with(Session::is_authenticated)),
            role: Signal::derive(move || session.with(Session::role)),
            store: StoredValue::new_local(store),
        }
    }

    pub fn store(&self) -> Rc<PortalSession> {
        self.store.get_value()
    }

    /// Current principal, falling back to the cached copy while the session
    /// is still resolving.
    pub fn principal(&self) -> Option<Profile> {
        let (principal, resolving) = self
            .session
            .with(|session| (session.principal().cloned(), session.is_resolving()));
        principal.or_else(|| resolving.then(|| self.store().cached_profile()).flatten())
    }

    /// Bearer token for feature calls.
    ///
    /// # Errors
    /// Returns a 401-shaped error when nobody is signed in.
    pub fn bearer(&self) -> Result<String, ApiError> {
        self.store().token().ok_or_else(|| ApiError::Http {
            status: 401,
            detail: Some(SESSION_ENDED.to_string()),
        })
    }

    /// Signs out. The route guards react to the cleared session.
    pub fn logout(&self) {
        let store = self.store();
        spawn_local(async move { store.logout().await });
    }
}

/// Provides auth context and restores the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = Rc::new(PortalSession::new(HttpAuthApi, BrowserStorage));
    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |next| session.set(next.clone()));

    provide_context(AuthContext::new(Rc::clone(&store), session));

    spawn_local(async move { store.restore().await });

    view! { {children()} }
}

/// Returns the current auth context. Outside a provider this is a detached,
/// signed-out context so a misplaced view renders the login redirect instead
/// of panicking.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        tracing::warn!("auth context missing, using a signed-out session");
        let store = Rc::new(PortalSession::new(HttpAuthApi, BrowserStorage));
        AuthContext::new(store, RwSignal::new(Session::anonymous()))
    })
}
