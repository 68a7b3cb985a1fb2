//! Wire types for Shopme user accounts. The backend stores users in
//! MongoDB, so records use `_id` and camelCase keys, and older records
//! may omit fields entirely. Every struct defaults missing fields so a
//! partial record still renders.

use serde::{Deserialize, Serialize};

/// Consumer entry as returned by the list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
}

/// Full consumer record from the detail endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consumer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub city: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub image: String,
    pub bio: String,
    pub connections: Vec<Connection>,
    pub created_at: String,
    pub updated_at: String,
}

/// Reseller entry as returned by the list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResellerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub business_name: String,
    pub email: String,
    pub image: String,
}

/// Full reseller record from the detail endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reseller {
    #[serde(rename = "_id")]
    pub id: String,
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub city: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub image: String,
    // Older records spell this key out in full.
    #[serde(alias = "backgroundImage")]
    pub bg_image: String,
    pub about_us: String,
    pub catalogue_count: u32,
    pub connections: Vec<Connection>,
    pub created_at: String,
    pub updated_at: String,
}

/// Edge between two users. The backend writes the relation key as
/// `Type` on most records and `relationType` on some older ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "Type", alias = "relationType")]
    pub relation_type: String,
}

#[cfg(test)]
mod tests {
    use super::{Connection, Consumer, Reseller, ResellerSummary};

    #[test]
    fn consumer_decodes_mongo_shape() {
        let raw = r#"{
            "_id": "663a01",
            "name": "Alice",
            "email": "alice@example.com",
            "type": "consumer",
            "connections": [
                {"userId": "663a02", "Type": "follower"},
                {"userId": "663a03", "relationType": "following"}
            ],
            "createdAt": "2024-03-04T09:30:00.000Z"
        }"#;

        let consumer: Consumer = serde_json::from_str(raw).unwrap();
        assert_eq!(consumer.id, "663a01");
        assert_eq!(consumer.user_type, "consumer");
        assert_eq!(consumer.created_at, "2024-03-04T09:30:00.000Z");
        assert_eq!(
            consumer.connections,
            vec![
                Connection {
                    user_id: "663a02".to_string(),
                    relation_type: "follower".to_string(),
                },
                Connection {
                    user_id: "663a03".to_string(),
                    relation_type: "following".to_string(),
                },
            ]
        );
        // Omitted fields fall back to defaults instead of failing.
        assert_eq!(consumer.bio, "");
        assert_eq!(consumer.contact, "");
    }

    #[test]
    fn reseller_accepts_both_background_image_keys() {
        let short: Reseller =
            serde_json::from_str(r#"{"_id": "r1", "bgImage": "https://img/short"}"#).unwrap();
        assert_eq!(short.bg_image, "https://img/short");

        let long: Reseller =
            serde_json::from_str(r#"{"_id": "r1", "backgroundImage": "https://img/long"}"#)
                .unwrap();
        assert_eq!(long.bg_image, "https://img/long");
    }

    #[test]
    fn reseller_summary_decodes_list_entry() {
        let raw = r#"{"_id": "r9", "businessName": "Crafts Hub", "email": "hub@example.com", "catalogueCount": 12}"#;

        let summary: ResellerSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.id, "r9");
        assert_eq!(summary.business_name, "Crafts Hub");
        assert_eq!(summary.image, "");
    }
}
