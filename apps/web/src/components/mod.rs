//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod submission_table;
pub(crate) mod ui;

pub(crate) use layout::{AdminLayout, AuthCard, StudentLayout};
pub(crate) use submission_table::{SubmissionTable, TableAudience};
pub(crate) use ui::{
    Alert, AlertKind, Button, ButtonVariant, DetailRow, LoadingScreen, PageHeader, Spinner,
    StatCard, StatusBadge, TextField,
};
