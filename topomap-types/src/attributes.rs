//! Attribute sets and attributed values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable set of string attributes (tags) of a map entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the set contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set has an attribute with the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Value of the attribute with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of the attribute with the given key, or `default` if there is no such attribute.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Value of the attribute parsed as an integer.
    ///
    /// Returns `default` if there is no such attribute or its value is not a valid integer.
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Returns a new set that contains only attributes with one of the given keys.
    pub fn keep_only_keys<I, K>(&self, keys: I) -> Attributes
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let values = keys
            .into_iter()
            .filter_map(|key| {
                self.values
                    .get_key_value(key.as_ref())
                    .map(|(k, v)| (k.clone(), v.clone()))
            })
            .collect();
        Self { values }
    }

    /// Iterates over `(key, value)` pairs ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Attributes {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

/// A value with attributes attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attributed<T> {
    value: T,
    attributes: Attributes,
}

impl<T> Attributed<T> {
    /// Attaches `attributes` to the `value`.
    pub fn new(value: T, attributes: Attributes) -> Self {
        Self { value, attributes }
    }

    /// The value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Splits into the value and the attributes.
    pub fn into_parts(self) -> (T, Attributes) {
        (self.value, self.attributes)
    }

    /// Returns true if the attributes contain the given key.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    /// See [`Attributes::get`].
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// See [`Attributes::get_or`].
    pub fn attribute_value_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attributes.get_or(key, default)
    }

    /// See [`Attributes::get_int_or`].
    pub fn attribute_int_or(&self, key: &str, default: i32) -> i32 {
        self.attributes.get_int_or(key, default)
    }

    /// Converts the value keeping the attributes.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attributed<U> {
        Attributed {
            value: f(self.value),
            attributes: self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> Attributes {
        [
            ("building", "yes"),
            ("layer", "2"),
            ("name", "Rolex Learning Center"),
            ("height", "ten"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn accessors() {
        let attrs = attributes();

        assert_eq!(attrs.len(), 4);
        assert!(attrs.contains("building"));
        assert!(!attrs.contains("highway"));
        assert_eq!(attrs.get("building"), Some("yes"));
        assert_eq!(attrs.get("highway"), None);
        assert_eq!(attrs.get_or("highway", "none"), "none");
        assert_eq!(attrs.get_or("name", "none"), "Rolex Learning Center");
    }

    #[test]
    fn int_accessor() {
        let attrs = attributes();

        assert_eq!(attrs.get_int_or("layer", 0), 2);
        assert_eq!(attrs.get_int_or("height", -1), -1);
        assert_eq!(attrs.get_int_or("missing", 7), 7);
    }

    #[test]
    fn keep_only_keys() {
        let attrs = attributes();

        let kept = attrs.keep_only_keys(["building", "layer", "highway"]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.get("building"), Some("yes"));
        assert_eq!(kept.get("layer"), Some("2"));
        assert!(!kept.contains("name"));

        assert!(attrs.keep_only_keys(["highway"]).is_empty());
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn attributed() {
        let attributed = Attributed::new(5, attributes());

        assert_eq!(*attributed.value(), 5);
        assert!(attributed.has_attribute("name"));
        assert_eq!(attributed.attribute_value("building"), Some("yes"));
        assert_eq!(attributed.attribute_value_or("bridge", "no"), "no");
        assert_eq!(attributed.attribute_int_or("layer", 0), 2);

        let mapped = attributed.map(|v| v * 2);
        assert_eq!(*mapped.value(), 10);
        assert_eq!(mapped.attributes(), &attributes());
    }

    #[test]
    fn serialization() {
        let attrs: Attributes = [("layer", "1")].into_iter().collect();
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"layer":"1"}"#);
        assert_eq!(serde_json::from_str::<Attributes>(&json).unwrap(), attrs);
    }
}
