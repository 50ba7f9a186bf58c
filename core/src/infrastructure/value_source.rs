use std::collections::HashMap;

use crate::domain::query::ports::ValueSource;

/// Multi-valued key store built from decoded request pairs.
///
/// Keys are unordered. Each key keeps its values in arrival order and
/// lookups see the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: HashMap<String, Vec<String>>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = Self::new();
        for (key, value) in pairs {
            values.insert(key, value);
        }
        values
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ValueSource for FormValues {
    fn first_value(&self, key: &str) -> Option<String> {
        self.get_all(key).first().cloned()
    }

    fn has_any(&self, key: &str) -> bool {
        !self.get_all(key).is_empty()
    }
}

impl ValueSource for HashMap<String, String> {
    fn first_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn has_any(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl ValueSource for HashMap<String, Vec<String>> {
    fn first_value(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|values| values.first()).cloned()
    }

    fn has_any(&self, key: &str) -> bool {
        self.get(key).is_some_and(|values| !values.is_empty())
    }
}
