use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog item listed by a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub price: Price,
    pub images: Vec<String>,
    pub created_at: String,
}

/// Catalog price as stored by the backend. Older records hold a bare
/// number, newer ones a preformatted string, so both decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(value) => write!(formatter, "{value}"),
            Price::Text(value) => write!(formatter, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Price};

    #[test]
    fn price_decodes_numbers_and_strings() {
        let numeric: Catalog =
            serde_json::from_str(r#"{"_id": "c1", "price": 499.5}"#).unwrap();
        assert_eq!(numeric.price, Price::Number(499.5));
        assert_eq!(numeric.price.to_string(), "499.5");

        let textual: Catalog =
            serde_json::from_str(r#"{"_id": "c2", "price": "499/kg"}"#).unwrap();
        assert_eq!(textual.price, Price::Text("499/kg".to_string()));
        assert_eq!(textual.price.to_string(), "499/kg");
    }

    #[test]
    fn missing_price_defaults_to_empty_text() {
        let catalog: Catalog = serde_json::from_str(r#"{"_id": "c3"}"#).unwrap();
        assert_eq!(catalog.price, Price::Text(String::new()));
    }
}
