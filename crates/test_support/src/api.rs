use portal_auth::{
    ApiError, AuthApi, AuthResponse, Credentials, Profile, RegisterRequest, Role,
};
use std::{
    cell::RefCell,
    collections::HashMap,
    future::poll_fn,
    rc::Rc,
    task::{Poll, Waker},
};

/// A recorded call against the fake. Passwords are not recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login { role: Role, email: String },
    Register { email: String },
    Logout { role: Role, token: Option<String> },
    FetchProfile { role: Role, token: String },
}

#[derive(Default)]
struct Inner {
    logins: HashMap<Role, Result<AuthResponse, ApiError>>,
    register: Option<Result<AuthResponse, ApiError>>,
    logout_error: Option<ApiError>,
    profile_error: Option<ApiError>,
    tokens: HashMap<String, (Role, Profile)>,
    profile_gate: Option<Gate>,
    calls: Vec<Call>,
}

/// Scripted auth backend. Tokens handed out by scripted logins and
/// registrations are remembered, so a later `fetch_profile` accepts them
/// until they are logged out.
#[derive(Clone, Default)]
pub struct FakeAuthApi {
    inner: Rc<RefCell<Inner>>,
}

impl FakeAuthApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept_login(&self, role: Role, response: AuthResponse) {
        self.inner.borrow_mut().logins.insert(role, Ok(response));
    }

    pub fn reject_login(&self, role: Role, error: ApiError) {
        self.inner.borrow_mut().logins.insert(role, Err(error));
    }

    pub fn accept_register(&self, response: AuthResponse) {
        self.inner.borrow_mut().register = Some(Ok(response));
    }

    pub fn reject_register(&self, error: ApiError) {
        self.inner.borrow_mut().register = Some(Err(error));
    }

    pub fn fail_logout(&self, error: ApiError) {
        self.inner.borrow_mut().logout_error = Some(error);
    }

    /// Makes every profile lookup fail with `error`.
    pub fn fail_profile(&self, error: ApiError) {
        self.inner.borrow_mut().profile_error = Some(error);
    }

    /// Registers a token the backend considers valid for `role`.
    pub fn issue_token(&self, role: Role, token: &str, profile: Profile) {
        self.inner
            .borrow_mut()
            .tokens
            .insert(token.to_string(), (role, profile));
    }

    /// Parks profile lookups until the returned gate is opened.
    #[must_use]
    pub fn hold_profile(&self) -> Gate {
        let gate = Gate::default();
        self.inner.borrow_mut().profile_gate = Some(gate.clone());
        gate
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inner.borrow().calls.len()
    }

    fn record(&self, call: Call) {
        self.inner.borrow_mut().calls.push(call);
    }

    fn remember(&self, role: Role, result: &Result<AuthResponse, ApiError>) {
        if let Ok(response) = result {
            self.issue_token(role, &response.token, response.user.clone());
        }
    }
}

fn unscripted(operation: &str) -> ApiError {
    ApiError::Network(format!("no scripted response for {operation}"))
}

impl AuthApi for FakeAuthApi {
    async fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> Result<AuthResponse, ApiError> {
        self.record(Call::Login {
            role,
            email: credentials.email.clone(),
        });
        let scripted = self.inner.borrow().logins.get(&role).cloned();
        let result = scripted.unwrap_or_else(|| Err(unscripted("login")));
        self.remember(role, &result);
        result
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record(Call::Register {
            email: request.email.clone(),
        });
        let scripted = self.inner.borrow().register.clone();
        let result = scripted.unwrap_or_else(|| Err(unscripted("register")));
        self.remember(Role::Student, &result);
        result
    }

    async fn logout(&self, role: Role, token: Option<&str>) -> Result<(), ApiError> {
        self.record(Call::Logout {
            role,
            token: token.map(str::to_string),
        });
        let mut inner = self.inner.borrow_mut();
        if let Some(error) = inner.logout_error.clone() {
            return Err(error);
        }
        if let Some(token) = token {
            inner.tokens.remove(token);
        }
        Ok(())
    }

    async fn fetch_profile(&self, role: Role, token: &str) -> Result<Profile, ApiError> {
        self.record(Call::FetchProfile {
            role,
            token: token.to_string(),
        });

        let gate = self.inner.borrow().profile_gate.clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }

        let inner = self.inner.borrow();
        if let Some(error) = inner.profile_error.clone() {
            return Err(error);
        }
        match inner.tokens.get(token) {
            Some((issued_for, profile)) if *issued_for == role => Ok(profile.clone()),
            _ => Err(ApiError::from_response(
                401,
                r#"{"message":"Invalid or expired token"}"#,
            )),
        }
    }
}

#[derive(Default)]
struct GateState {
    open: bool,
    waker: Option<Waker>,
}

/// One-shot latch for holding a fake call in flight.
#[derive(Clone, Default)]
pub struct Gate {
    state: Rc<RefCell<GateState>>,
}

impl Gate {
    pub fn open(&self) {
        let waker = {
            let mut state = self.state.borrow_mut();
            state.open = true;
            state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }

    async fn wait(&self) {
        poll_fn(|cx| {
            let mut state = self.state.borrow_mut();
            if state.open {
                Poll::Ready(())
            } else {
                state.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        })
        .await;
    }
}
