//! Case-insensitive substring search over user directories. Filtering
//! runs client-side on the already-fetched list, so typing in the search
//! box never issues new requests.

use crate::features::users::types::{ConsumerSummary, ResellerSummary};

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// Field values considered when matching.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record matches `query`. A blank query matches
    /// everything; otherwise the query must appear in at least one
    /// search field, ignoring case.
    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for ConsumerSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for ResellerSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.business_name.as_str(), self.email.as_str()]
    }
}

/// Returns the records matching `query`, preserving backend order.
pub fn filter<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Searchable, filter};
    use crate::features::users::types::{ConsumerSummary, ResellerSummary};

    fn consumer(name: &str, email: &str) -> ConsumerSummary {
        ConsumerSummary {
            id: format!("id-{name}"),
            name: name.to_string(),
            email: email.to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn blank_query_matches_every_record() {
        let records = vec![
            consumer("Alice", "alice@example.com"),
            consumer("Bob", "bob@example.net"),
        ];

        assert_eq!(filter(&records, "").len(), 2);
        assert_eq!(filter(&records, "   ").len(), 2);
    }

    #[test]
    fn query_matches_name_or_email_ignoring_case() {
        let records = vec![
            consumer("Alice", "alice@example.com"),
            consumer("Bob", "bob@example.net"),
        ];

        let by_name = filter(&records, "ALI");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice");

        let by_email = filter(&records, "example.net");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Bob");
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let records = vec![consumer("Alice", "alice@example.com")];
        assert!(filter(&records, "zzz").is_empty());
    }

    #[test]
    fn resellers_match_on_business_name() {
        let reseller = ResellerSummary {
            id: "r1".to_string(),
            business_name: "Crafts Hub".to_string(),
            email: "hub@example.com".to_string(),
            image: String::new(),
        };

        assert!(reseller.matches("crafts"));
        assert!(reseller.matches("HUB@"));
        assert!(!reseller.matches("bakery"));
    }
}
