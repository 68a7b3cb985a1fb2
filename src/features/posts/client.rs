use crate::{
    app_lib::{AppError, get_json},
    features::posts::types::Post,
};

/// Fetches every post published by the given user.
pub async fn list_by_user(user_id: &str) -> Result<Vec<Post>, AppError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    get_json(&format!("/api/post/getPostByUserId/?userId={trimmed}")).await
}
