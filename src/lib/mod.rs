//! Shared frontend utilities for API access, configuration, errors,
//! remote data bindings, and build metadata. Centralizing these helpers
//! keeps network behavior consistent and avoids duplicated logic in
//! routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod format;
pub(crate) mod remote;

pub(crate) use api::{get_json, get_optional_json};
pub(crate) use errors::AppError;
