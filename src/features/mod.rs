//! Domain-level frontend features (users, posts, requirements, catalogs)
//! and their shared logic. Routes import these modules to keep view code
//! focused while keeping API handling in dedicated feature areas.

pub(crate) mod catalogs;
pub(crate) mod posts;
pub(crate) mod requirements;
pub(crate) mod users;
