//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;
pub(crate) mod user_directory;

pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Avatar, EmptyState, Spinner, TabBar, TabSpec};
pub(crate) use user_directory::UserDirectory;
