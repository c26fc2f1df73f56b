use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::DataError;

/// Mapping from country code to display name. Immutable after load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from a JSON object of the form `{"FR": "France", ...}`
    pub fn from_json_str(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build a catalog from (code, name) pairs
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Display name for a country code
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Country codes in stable (sorted) order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json_str(r#"{"FR": "France", "DE": "Germany"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name_of("FR"), Some("France"));
        assert_eq!(catalog.name_of("DE"), Some("Germany"));
        assert_eq!(catalog.name_of("XX"), None);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Catalog::from_json_str(r#"{"FR": 1}"#).is_err());
        assert!(Catalog::from_json_str("not json").is_err());
    }

    #[test]
    fn test_codes_are_sorted() {
        let catalog = Catalog::from_entries([("NL", "Netherlands"), ("DE", "Germany")]);
        let codes: Vec<&str> = catalog.codes().collect();
        assert_eq!(codes, vec!["DE", "NL"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.codes().count(), 0);
    }
}
