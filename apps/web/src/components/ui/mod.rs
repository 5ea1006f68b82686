mod alert;
mod button;
mod field;
mod page;
mod spinner;
mod status_badge;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use field::TextField;
pub(crate) use page::{DetailRow, PageHeader, StatCard};
pub(crate) use spinner::{LoadingScreen, Spinner};
pub(crate) use status_badge::StatusBadge;
