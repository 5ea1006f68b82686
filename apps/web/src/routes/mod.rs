//! Route table. Admin and student subtrees sit under guarded parent layouts;
//! the public pages guard themselves so signed-in users bounce to their home.

mod admin;
mod forgot_password;
mod login;
mod register;
mod reset_password;
mod student;
mod unmatched;

use crate::components::{AdminLayout, StudentLayout};
use admin::{
    AdminDashboardPage, AdminProfilePage, PendingSubmissionsPage, SubmissionDetailPage,
    SubmissionReviewPage,
};
use forgot_password::ForgotPasswordPage;
use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Redirect, Route, Routes},
    path,
};
use login::LoginPage;
use portal_auth::guard::paths;
use register::RegisterPage;
use reset_password::ResetPasswordPage;
use student::{
    ChallengeDetailPage, ChallengesPage, MySubmissionsPage, StudentDashboardPage,
    StudentProfilePage,
};
use unmatched::UnmatchedRoute;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <UnmatchedRoute /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=paths::LOGIN /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/reset-password/:token") view=ResetPasswordPage />

            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("") view=|| view! { <Redirect path=paths::ADMIN_HOME /> } />
                <Route path=path!("dashboard") view=AdminDashboardPage />
                <Route path=path!("submissions") view=SubmissionReviewPage />
                <Route path=path!("submissions/pending") view=PendingSubmissionsPage />
                <Route path=path!("submissions/:id") view=SubmissionDetailPage />
                <Route path=path!("profile") view=AdminProfilePage />
            </ParentRoute>

            <ParentRoute path=path!("/student") view=StudentLayout>
                <Route path=path!("") view=|| view! { <Redirect path=paths::STUDENT_HOME /> } />
                <Route path=path!("dashboard") view=StudentDashboardPage />
                <Route path=path!("challenges") view=ChallengesPage />
                <Route path=path!("challenges/:id") view=ChallengeDetailPage />
                <Route path=path!("submissions") view=MySubmissionsPage />
                <Route path=path!("profile") view=StudentProfilePage />
            </ParentRoute>
        </Routes>
    }
}
