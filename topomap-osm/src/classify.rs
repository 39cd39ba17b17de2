//! Decides what geometry a way turns into and which of its tags are kept.

use topomap_types::Attributes;

use crate::config::TransformerConfig;
use crate::entity::OsmWay;

const AREA_TAG: &str = "area";

/// Geometry kind of a way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WayClass {
    /// Way that is not closed. Becomes an open polyline.
    OpenLine,
    /// Closed way that is not an area. Becomes a closed polyline.
    ClosedLine,
    /// Closed way that encloses an area. Becomes a polygon without holes.
    Area,
}

impl WayClass {
    /// Classifies the way.
    ///
    /// A closed way is an area if it has any of the configured area tags, or if its `area` tag has one of the
    /// configured values.
    pub fn of(way: &OsmWay, config: &TransformerConfig) -> Self {
        if !way.is_closed() {
            return Self::OpenLine;
        }

        let attributes = way.attributes();
        let has_area_key = config.area_keys().iter().any(|k| attributes.contains(k));
        let area_value = attributes
            .get(AREA_TAG)
            .is_some_and(|v| config.area_values().iter().any(|a| a == v));

        if has_area_key || area_value {
            Self::Area
        } else {
            Self::ClosedLine
        }
    }

    /// Tags kept on the geometry of this class.
    pub fn kept_keys(self, config: &TransformerConfig) -> &[String] {
        match self {
            Self::OpenLine | Self::ClosedLine => config.line_keys(),
            Self::Area => config.polygon_keys(),
        }
    }

    /// Tags of the `attributes` kept on the geometry of this class.
    pub fn filter(self, attributes: &Attributes, config: &TransformerConfig) -> Attributes {
        attributes.keep_only_keys(self.kept_keys(config))
    }
}
