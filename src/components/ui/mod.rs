mod alert;
mod avatar;
mod badge;
mod empty_state;
mod search_input;
mod spinner;
mod tab_bar;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use avatar::Avatar;
pub(crate) use badge::CountBadge;
pub(crate) use empty_state::EmptyState;
pub(crate) use search_input::SearchInput;
pub(crate) use spinner::Spinner;
pub(crate) use tab_bar::{TabBar, TabSpec};
