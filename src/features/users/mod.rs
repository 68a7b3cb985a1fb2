pub(crate) mod client;
pub(crate) mod search;
pub(crate) mod types;
