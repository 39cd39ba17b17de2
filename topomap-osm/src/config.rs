use serde::{Deserialize, Serialize};

use crate::error::TopomapOsmError;

const AREA_KEYS: &[&str] = &[
    "aeroway",
    "amenity",
    "building",
    "harbour",
    "historic",
    "landuse",
    "leisure",
    "man_made",
    "military",
    "natural",
    "office",
    "place",
    "power",
    "public_transport",
    "shop",
    "sport",
    "tourism",
    "water",
    "waterway",
    "wetland",
];

const AREA_VALUES: &[&str] = &["1", "yes", "true"];

const LINE_KEYS: &[&str] = &[
    "bridge", "highway", "layer", "man_made", "railway", "tunnel", "waterway",
];

const POLYGON_KEYS: &[&str] = &["building", "landuse", "layer", "leisure", "natural", "waterway"];

const MULTIPOLYGON_TYPE: &str = "multipolygon";

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Configuration of a [`Transformer`](crate::Transformer).
///
/// The default configuration classifies and filters entities with the standard OpenStreetMap allow-lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    area_keys: Vec<String>,
    area_values: Vec<String>,
    line_keys: Vec<String>,
    polygon_keys: Vec<String>,
    multipolygon_type: String,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            area_keys: to_strings(AREA_KEYS),
            area_values: to_strings(AREA_VALUES),
            line_keys: to_strings(LINE_KEYS),
            polygon_keys: to_strings(POLYGON_KEYS),
            multipolygon_type: MULTIPOLYGON_TYPE.to_string(),
        }
    }
}

impl TransformerConfig {
    /// Reads configuration from a JSON document. Fields missing in the document get their default values.
    pub fn from_json(json: &str) -> Result<Self, TopomapOsmError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A closed way with any of these tags is an area.
    pub fn area_keys(&self) -> &[String] {
        &self.area_keys
    }

    /// Sets the tags that make a closed way an area.
    pub fn with_area_keys(mut self, keys: Vec<String>) -> Self {
        self.area_keys = keys;
        self
    }

    /// A closed way with the `area` tag set to one of these values is an area.
    pub fn area_values(&self) -> &[String] {
        &self.area_values
    }

    /// Sets the values of the `area` tag that make a closed way an area.
    pub fn with_area_values(mut self, values: Vec<String>) -> Self {
        self.area_values = values;
        self
    }

    /// Tags kept on polylines.
    pub fn line_keys(&self) -> &[String] {
        &self.line_keys
    }

    /// Sets the tags kept on polylines.
    pub fn with_line_keys(mut self, keys: Vec<String>) -> Self {
        self.line_keys = keys;
        self
    }

    /// Tags kept on polygons.
    pub fn polygon_keys(&self) -> &[String] {
        &self.polygon_keys
    }

    /// Sets the tags kept on polygons.
    pub fn with_polygon_keys(mut self, keys: Vec<String>) -> Self {
        self.polygon_keys = keys;
        self
    }

    /// Value of the `type` tag of relations that are assembled into polygons.
    pub fn multipolygon_type(&self) -> &str {
        &self.multipolygon_type
    }

    /// Sets the value of the `type` tag of relations that are assembled into polygons.
    pub fn with_multipolygon_type(mut self, relation_type: impl Into<String>) -> Self {
        self.multipolygon_type = relation_type.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_lists() {
        let config = TransformerConfig::default();

        assert_eq!(config.area_keys().len(), 20);
        assert!(config.area_keys().iter().any(|k| k == "public_transport"));
        assert_eq!(config.area_values(), &["1", "yes", "true"]);
        assert_eq!(
            config.line_keys(),
            &["bridge", "highway", "layer", "man_made", "railway", "tunnel", "waterway"]
        );
        assert_eq!(
            config.polygon_keys(),
            &["building", "landuse", "layer", "leisure", "natural", "waterway"]
        );
        assert_eq!(config.multipolygon_type(), "multipolygon");
    }

    #[test]
    fn from_json_uses_defaults() {
        let config = TransformerConfig::from_json(r#"{"line_keys": ["highway"]}"#).unwrap();

        assert_eq!(config.line_keys(), &["highway"]);
        assert_eq!(config.polygon_keys(), TransformerConfig::default().polygon_keys());
    }

    #[test]
    fn from_invalid_json() {
        assert_matches!(
            TransformerConfig::from_json(r#"{"line_keys": 5}"#),
            Err(TopomapOsmError::Config(_))
        );
    }

    #[test]
    fn builder() {
        let config = TransformerConfig::default()
            .with_area_keys(vec!["building".into()])
            .with_area_values(vec![])
            .with_multipolygon_type("boundary");

        assert_eq!(config.area_keys(), &["building"]);
        assert!(config.area_values().is_empty());
        assert_eq!(config.multipolygon_type(), "boundary");
    }
}
