//! Route authorization gate. A pure function of the session snapshot: it never
//! mutates state, and the caller performs whatever redirect it returns.
//! This is UX only; the API enforces access on every request.

use crate::{session::Session, types::Role};

pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const RESET_PASSWORD_PREFIX: &str = "/reset-password/";

    pub const ADMIN_ROOT: &str = "/admin";
    pub const ADMIN_HOME: &str = "/admin/dashboard";
    pub const ADMIN_SUBMISSIONS: &str = "/admin/submissions";
    pub const ADMIN_PENDING_SUBMISSIONS: &str = "/admin/submissions/pending";
    pub const ADMIN_PROFILE: &str = "/admin/profile";

    pub const STUDENT_ROOT: &str = "/student";
    pub const STUDENT_HOME: &str = "/student/dashboard";
    pub const STUDENT_CHALLENGES: &str = "/student/challenges";
    pub const STUDENT_SUBMISSIONS: &str = "/student/submissions";
    pub const STUDENT_PROFILE: &str = "/student/profile";

    pub fn admin_submission(id: &str) -> String {
        format!("{ADMIN_SUBMISSIONS}/{id}")
    }

    pub fn student_challenge(id: &str) -> String {
        format!("{STUDENT_CHALLENGES}/{id}")
    }

    pub fn reset_password(token: &str) -> String {
        format!("{RESET_PASSWORD_PREFIX}{token}")
    }
}

/// Guard category of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteCategory {
    AdminOnly,
    StudentOnly,
    /// Login, registration and password recovery: hidden from signed-in users.
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restoration in flight: render a neutral placeholder, do not redirect.
    Loading,
    Render,
    Redirect(&'static str),
}

impl RouteCategory {
    /// Decides what a guarded route shows for the given snapshot.
    pub fn decide(self, session: &Session) -> GuardDecision {
        decide(self, session.is_resolving(), session.role())
    }
}

/// Decision table over `(category, resolving, role)`. `role` is `None` when
/// unauthenticated.
pub fn decide(category: RouteCategory, resolving: bool, role: Option<Role>) -> GuardDecision {
    if resolving {
        return GuardDecision::Loading;
    }

    match (category, role) {
        (RouteCategory::AdminOnly, Some(Role::Admin))
        | (RouteCategory::StudentOnly, Some(Role::Student))
        | (RouteCategory::PublicOnly, None) => GuardDecision::Render,
        (RouteCategory::AdminOnly | RouteCategory::StudentOnly, _) => {
            GuardDecision::Redirect(paths::LOGIN)
        }
        (RouteCategory::PublicOnly, Some(role)) => GuardDecision::Redirect(role.home_path()),
    }
}

/// How the router treats a client path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathClass {
    Guarded(RouteCategory),
    /// Reachable in any session state (password reset links).
    Unguarded,
    /// `/` and unknown paths: sent to the login view.
    ToLogin,
}

/// Classifies a client path.
pub fn category_for_path(path: &str) -> PathClass {
    let path = normalize(path);

    if is_within(path, paths::ADMIN_ROOT) {
        PathClass::Guarded(RouteCategory::AdminOnly)
    } else if is_within(path, paths::STUDENT_ROOT) {
        PathClass::Guarded(RouteCategory::StudentOnly)
    } else if [paths::LOGIN, paths::REGISTER, paths::FORGOT_PASSWORD].contains(&path) {
        PathClass::Guarded(RouteCategory::PublicOnly)
    } else if path
        .strip_prefix(paths::RESET_PASSWORD_PREFIX)
        .is_some_and(|token| !token.is_empty() && !token.contains('/'))
    {
        PathClass::Unguarded
    } else {
        PathClass::ToLogin
    }
}

/// True when `path` is `root` or lies beneath it at a segment boundary.
pub(crate) fn is_within(path: &str, root: &str) -> bool {
    path.strip_prefix(root)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Drops any query or fragment and a trailing slash.
pub(crate) fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Profile;

    const CATEGORIES: [RouteCategory; 3] = [
        RouteCategory::AdminOnly,
        RouteCategory::StudentOnly,
        RouteCategory::PublicOnly,
    ];

    #[test]
    fn resolving_always_shows_loading() {
        for category in CATEGORIES {
            for role in [None, Some(Role::Admin), Some(Role::Student)] {
                assert_eq!(decide(category, true, role), GuardDecision::Loading);
            }
        }
    }

    #[test]
    fn admin_only_routes() {
        let category = RouteCategory::AdminOnly;
        assert_eq!(decide(category, false, Some(Role::Admin)), GuardDecision::Render);
        assert_eq!(
            decide(category, false, Some(Role::Student)),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(decide(category, false, None), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn student_only_routes() {
        let category = RouteCategory::StudentOnly;
        assert_eq!(decide(category, false, Some(Role::Student)), GuardDecision::Render);
        assert_eq!(
            decide(category, false, Some(Role::Admin)),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(decide(category, false, None), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn public_only_routes_bounce_signed_in_users_home() {
        let category = RouteCategory::PublicOnly;
        assert_eq!(decide(category, false, None), GuardDecision::Render);
        assert_eq!(
            decide(category, false, Some(Role::Admin)),
            GuardDecision::Redirect("/admin/dashboard")
        );
        assert_eq!(
            decide(category, false, Some(Role::Student)),
            GuardDecision::Redirect("/student/dashboard")
        );
    }

    #[test]
    fn decide_reads_session_snapshot() {
        let student = Session::authenticated(Role::Student, Profile::default());
        assert_eq!(
            RouteCategory::AdminOnly.decide(&student),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(RouteCategory::StudentOnly.decide(&student), GuardDecision::Render);
        assert_eq!(
            RouteCategory::PublicOnly.decide(&Session::resolving()),
            GuardDecision::Loading
        );
        assert_eq!(
            RouteCategory::PublicOnly.decide(&Session::anonymous()),
            GuardDecision::Render
        );
    }

    #[test]
    fn category_for_path_maps_route_table() {
        let admin = PathClass::Guarded(RouteCategory::AdminOnly);
        let student = PathClass::Guarded(RouteCategory::StudentOnly);
        let public = PathClass::Guarded(RouteCategory::PublicOnly);

        assert_eq!(category_for_path("/admin"), admin);
        assert_eq!(category_for_path("/admin/submissions/pending"), admin);
        assert_eq!(category_for_path("/student"), student);
        assert_eq!(category_for_path("/student/challenges/42?tab=hints"), student);
        assert_eq!(category_for_path("/login"), public);
        assert_eq!(category_for_path("/register/"), public);
        assert_eq!(category_for_path("/forgot-password"), public);
        assert_eq!(category_for_path("/reset-password/abc123"), PathClass::Unguarded);
        assert_eq!(category_for_path("/reset-password/"), PathClass::ToLogin);
        assert_eq!(category_for_path("/"), PathClass::ToLogin);
        assert_eq!(category_for_path("/administrator"), PathClass::ToLogin);
        assert_eq!(category_for_path("/nope"), PathClass::ToLogin);
    }
}
