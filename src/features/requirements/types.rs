use serde::{Deserialize, Serialize};

/// A sourcing requirement opened by a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirement {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub total_price: f64,
    pub details: String,
    pub images: Vec<String>,
    pub created_at: String,
}
