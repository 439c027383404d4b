//! Per-invocation trigger data.

use std::collections::HashMap;

/// The string-keyed payload composed by a trigger on every invocation.
///
/// Rebuilt fresh each time a trigger fires; mutating an element's data
/// attributes between invocations changes what the next invocation
/// observes. Base entries come from `:data:` supplements; richer trigger
/// types may merge structured extras (e.g. header values) into a separate
/// supplement field keyed by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerData {
    entries: HashMap<String, String>,
    supplements: HashMap<String, HashMap<String, String>>,
}

impl TriggerData {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a base data entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Record a base data entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of base data entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no base data entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the base data entries (order is not meaningful).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The entries collected for a supplement kind, if any.
    pub fn supplement(&self, kind: &str) -> Option<&HashMap<String, String>> {
        self.supplements.get(kind)
    }

    /// Look up a single supplement entry.
    pub fn supplement_value(&self, kind: &str, key: &str) -> Option<&str> {
        self.supplements
            .get(kind)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Merge entries into a supplement kind, overwriting duplicate keys.
    pub fn merge_supplement(&mut self, kind: impl Into<String>, entries: HashMap<String, String>) {
        self.supplements
            .entry(kind.into())
            .or_default()
            .extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_entries() {
        let mut data = TriggerData::new();
        assert!(data.is_empty());

        data.insert("id", "42");
        data.insert("color", "red");

        assert_eq!(data.len(), 2);
        assert_eq!(data.get("id"), Some("42"));
        assert_eq!(data.get("missing"), None);
    }

    #[test]
    fn supplements_are_kept_apart_from_base_entries() {
        let mut data = TriggerData::new();
        data.insert("id", "42");
        data.merge_supplement(
            "header",
            HashMap::from([("x-token".to_owned(), "abc".to_owned())]),
        );

        assert_eq!(data.len(), 1);
        assert_eq!(data.supplement_value("header", "x-token"), Some("abc"));
        assert_eq!(data.get("x-token"), None);
    }

    #[test]
    fn merging_twice_extends_the_same_kind() {
        let mut data = TriggerData::new();
        data.merge_supplement("header", HashMap::from([("a".to_owned(), "1".to_owned())]));
        data.merge_supplement("header", HashMap::from([("b".to_owned(), "2".to_owned())]));

        let header = data.supplement("header").unwrap();
        assert_eq!(header.len(), 2);
    }
}
