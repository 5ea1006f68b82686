//! Page chrome: the signed-in portal shell with its sidebar, the guarded role
//! layouts used as parent routes, and the card used by the public pages.

mod auth_card;
mod portal_shell;
mod role_layout;
mod sidebar;

pub(crate) use auth_card::AuthCard;
pub(crate) use portal_shell::PortalShell;
pub(crate) use role_layout::{AdminLayout, StudentLayout};
pub(crate) use sidebar::Sidebar;
