use crate::{
    app_lib::{AppError, get_json},
    features::catalogs::types::Catalog,
};

/// Fetches every catalog item listed by the given user.
pub async fn list_by_user(user_id: &str) -> Result<Vec<Catalog>, AppError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    get_json(&format!("/api/catalog/getAllByUserId/?userId={trimmed}")).await
}
