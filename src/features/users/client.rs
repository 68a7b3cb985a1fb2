//! Client helpers for user-related API endpoints. These functions keep
//! endpoint paths centralized; the backend exposes the admin data
//! without additional headers.

use crate::{
    app_lib::{AppError, get_json, get_optional_json},
    features::users::types::{Consumer, ConsumerSummary, Reseller, ResellerSummary},
};

/// Fetches every consumer account.
pub async fn list_consumers() -> Result<Vec<ConsumerSummary>, AppError> {
    get_json("/api/user/getConsumers").await
}

/// Fetches every reseller account.
pub async fn list_resellers() -> Result<Vec<ResellerSummary>, AppError> {
    get_json("/api/user/getResellers").await
}

/// Fetches one consumer by id. Returns `Ok(None)` when no such user exists.
pub async fn get_consumer(id: &str) -> Result<Option<Consumer>, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Consumer id is required.".to_string()));
    }

    get_optional_json(&format!("/api/user/getConsumer/?id={trimmed}")).await
}

/// Fetches one reseller by id. Returns `Ok(None)` when no such user exists.
pub async fn get_reseller(id: &str) -> Result<Option<Reseller>, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Reseller id is required.".to_string()));
    }

    get_optional_json(&format!("/api/user/getReseller/?id={trimmed}")).await
}
