use serde::{Deserialize, Serialize};

use crate::attributes::Attributed;
use crate::polygon::Polygon;
use crate::polyline::PolyLine;

/// Flattened vector map: attributed polylines and polygons in the projected plane.
///
/// The order of the geometries is the order in which they were produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapModel {
    polylines: Vec<Attributed<PolyLine>>,
    polygons: Vec<Attributed<Polygon>>,
}

impl MapModel {
    /// Creates a new map.
    pub fn new(polylines: Vec<Attributed<PolyLine>>, polygons: Vec<Attributed<Polygon>>) -> Self {
        Self {
            polylines,
            polygons,
        }
    }

    /// Polylines of the map.
    pub fn polylines(&self) -> &[Attributed<PolyLine>] {
        &self.polylines
    }

    /// Polygons of the map.
    pub fn polygons(&self) -> &[Attributed<Polygon>] {
        &self.polygons
    }

    /// Returns true if the map has no geometries.
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.polygons.is_empty()
    }

    /// Splits the map into polylines and polygons.
    pub fn into_parts(self) -> (Vec<Attributed<PolyLine>>, Vec<Attributed<Polygon>>) {
        (self.polylines, self.polygons)
    }
}
