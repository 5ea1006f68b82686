//! Session store: the single in-memory answer to "who is signed in, and as
//! what", kept in step with durable storage and the remote API.
//!
//! The store is a single-writer state container. Views read `snapshot()` or
//! register a listener with `subscribe()`; only the store's own operations
//! mutate state. Every public operation reduces API failures to a value, so
//! nothing here returns an unhandled error to the UI.
//!
//! State lives in a `RefCell` because the store runs on the browser's single
//! event loop. A multi-threaded host would put it behind a mutex instead.

use crate::{
    api::AuthApi,
    error::AuthError,
    storage::{self, KeyValueStore},
    types::{Credentials, Profile, RegisterRequest, Role},
};
use std::cell::{Cell, RefCell};
use tracing::{debug, info, warn};

pub const LOGIN_FALLBACK: &str = "Login failed";
pub const REGISTER_FALLBACK: &str = "Registration failed";

/// Snapshot of the authentication state. Role and principal travel together,
/// so a half-authenticated session cannot be observed.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    identity: Option<(Role, Profile)>,
    resolving: bool,
}

impl Session {
    /// Startup state: nobody signed in yet, restoration pending.
    pub fn resolving() -> Self {
        Self {
            identity: None,
            resolving: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            identity: None,
            resolving: false,
        }
    }

    pub fn authenticated(role: Role, principal: Profile) -> Self {
        Self {
            identity: Some((role, principal)),
            resolving: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|(role, _)| *role)
    }

    pub fn principal(&self) -> Option<&Profile> {
        self.identity.as_ref().map(|(_, principal)| principal)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// True when signed in as exactly `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    fn with_identity(&self, identity: Option<(Role, Profile)>) -> Self {
        Self {
            identity,
            resolving: self.resolving,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving()
    }
}

type Listener = Box<dyn Fn(&Session)>;

pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    state: RefCell<Session>,
    // Authoritative bearer token; storage only mirrors it.
    token: RefCell<Option<String>>,
    // Bumped by every identity change so a slow restoration can tell it lost.
    epoch: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

impl<A, S> SessionStore<A, S>
where
    A: AuthApi,
    S: KeyValueStore,
{
    /// Creates an empty store in the resolving state. Call `restore()` once.
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            state: RefCell::new(Session::resolving()),
            token: RefCell::new(None),
            epoch: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Registers a listener that receives every state change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Bearer token for the signed-in role, if any. Held in memory, so it
    /// survives a failed storage write for the lifetime of the store.
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Cached, non-authoritative profile of whichever role holds a token. Used
    /// for display while restoration is still in flight.
    pub fn cached_profile(&self) -> Option<Profile> {
        Role::RESTORE_ORDER.into_iter().find_map(|role| {
            storage::load_token(&self.storage, role)?;
            storage::load_profile(&self.storage, role)
        })
    }

    /// Restores a persisted session. The admin token is checked before the
    /// student token. Any validation failure wipes every stored credential.
    /// Always leaves the session resolved.
    pub async fn restore(&self) {
        let started_at = self.epoch.get();
        let stored = Role::RESTORE_ORDER
            .into_iter()
            .find_map(|role| storage::load_token(&self.storage, role).map(|token| (role, token)));

        let Some((role, token)) = stored else {
            debug!("no stored session");
            self.settle_restore(started_at, None);
            return;
        };

        match self.api.fetch_profile(role, &token).await {
            Ok(profile) => {
                if self.epoch.get() == started_at {
                    if let Err(err) = storage::persist_profile(&self.storage, role, &profile) {
                        warn!(%role, "failed to refresh cached profile: {err}");
                    }
                }
                info!(%role, "session restored");
                self.settle_restore(started_at, Some((role, profile, token)));
            }
            Err(err) => {
                info!(%role, status = ?err.status(), "stored session rejected");
                if self.epoch.get() == started_at {
                    storage::clear_all(&self.storage);
                }
                self.settle_restore(started_at, None);
            }
        }
    }

    /// # Errors
    /// See [`SessionStore::login`].
    pub async fn login_as_admin(&self, credentials: &Credentials) -> Result<Profile, AuthError> {
        self.login(Role::Admin, credentials).await
    }

    /// # Errors
    /// See [`SessionStore::login`].
    pub async fn login_as_student(&self, credentials: &Credentials) -> Result<Profile, AuthError> {
        self.login(Role::Student, credentials).await
    }

    /// Signs in as `role`. On failure nothing is mutated.
    ///
    /// # Errors
    /// Returns a user-facing message extracted from the API error, falling
    /// back to "Login failed".
    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<Profile, AuthError> {
        match self.api.login(role, credentials).await {
            Ok(response) => Ok(self.establish(role, &response.token, response.user)),
            Err(err) => {
                info!(%role, status = ?err.status(), "login failed");
                Err(AuthError::from_api(&err, LOGIN_FALLBACK))
            }
        }
    }

    /// Registers a student account and signs it in.
    ///
    /// # Errors
    /// Returns a user-facing message extracted from the API error, falling
    /// back to "Registration failed".
    pub async fn register(&self, request: &RegisterRequest) -> Result<Profile, AuthError> {
        match self.api.register(request).await {
            Ok(response) => Ok(self.establish(Role::Student, &response.token, response.user)),
            Err(err) => {
                info!(status = ?err.status(), "registration failed");
                Err(AuthError::from_api(&err, REGISTER_FALLBACK))
            }
        }
    }

    /// Signs out the current role. The remote call is best-effort; local state
    /// and that role's stored credentials are cleared regardless.
    pub async fn logout(&self) {
        let current = self.state.borrow().role();
        let Some(role) = current else {
            self.replace_identity(None);
            return;
        };

        let token = self.token();
        if let Err(err) = self.api.logout(role, token.as_deref()).await {
            warn!(%role, "remote logout failed, clearing local session anyway: {err}");
        }

        storage::clear_role(&self.storage, role);
        *self.token.borrow_mut() = None;
        info!(%role, "signed out");
        self.replace_identity(None);
    }

    /// Swaps in a fresher principal for the signed-in role, e.g. after a
    /// profile update, and refreshes the cached copy.
    pub fn replace_principal(&self, profile: Profile) {
        let current = self.state.borrow().role();
        let Some(role) = current else {
            return;
        };
        if let Err(err) = storage::persist_profile(&self.storage, role, &profile) {
            warn!(%role, "failed to refresh cached profile: {err}");
        }
        self.replace_identity(Some((role, profile)));
    }

    fn establish(&self, role: Role, token: &str, profile: Profile) -> Profile {
        storage::clear_role(&self.storage, role.other());
        if let Err(err) = storage::persist_credentials(&self.storage, role, token, &profile) {
            warn!(%role, "session will not survive a reload: {err}");
        }
        info!(%role, "signed in");
        *self.token.borrow_mut() = Some(token.to_string());
        self.replace_identity(Some((role, profile.clone())));
        profile
    }

    fn replace_identity(&self, identity: Option<(Role, Profile)>) {
        self.epoch.set(self.epoch.get() + 1);
        let next = self.state.borrow().with_identity(identity);
        self.publish(next);
    }

    fn settle_restore(&self, started_at: u64, restored: Option<(Role, Profile, String)>) {
        let next = if self.epoch.get() == started_at {
            match restored {
                Some((role, profile, token)) => {
                    *self.token.borrow_mut() = Some(token);
                    Session::authenticated(role, profile)
                }
                None => {
                    *self.token.borrow_mut() = None;
                    Session::anonymous()
                }
            }
        } else {
            debug!("session changed during restoration, keeping newer state");
            Session {
                resolving: false,
                ..self.snapshot()
            }
        };
        self.publish(next);
    }

    fn publish(&self, next: Session) {
        *self.state.borrow_mut() = next.clone();
        for listener in self.listeners.borrow().iter() {
            listener(&next);
        }
    }
}
