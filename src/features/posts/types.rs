use serde::{Deserialize, Serialize};

/// A post published by a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    pub category: String,
    pub images: Vec<String>,
    pub created_at: String,
}
