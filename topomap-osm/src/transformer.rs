use topomap_types::cartesian::Point2d;
use topomap_types::geo::{GeoPoint2d, Projection};
use topomap_types::{Attributed, ClosedPolyLine, MapModel, OpenPolyLine, PolyLine, Polygon};

use crate::classify::WayClass;
use crate::config::TransformerConfig;
use crate::entity::{OsmMap, OsmRelation, OsmWay};
use crate::error::TopomapOsmError;
use crate::polygon::assemble_polygons;
use crate::project::project_nodes;
use crate::ring;

const TYPE_TAG: &str = "type";
const OUTER_ROLE: &str = "outer";
const INNER_ROLE: &str = "inner";

/// Geometry produced from a single way.
#[derive(Debug, Clone, PartialEq)]
pub enum WayGeometry {
    /// Open or closed polyline.
    PolyLine(Attributed<PolyLine>),
    /// Polygon without holes.
    Polygon(Attributed<Polygon>),
}

/// Converts topological map data into a projected [`MapModel`].
///
/// ```
/// use topomap_osm::{OsmMap, Transformer, TransformerConfig};
/// use topomap_types::cartesian::Point2d;
/// use topomap_types::geo::impls::projection::Equirectangular;
/// use topomap_types::geo::GeoPoint2d;
///
/// let projection = Equirectangular::<GeoPoint2d, Point2d>::new();
/// let transformer = Transformer::new(projection, TransformerConfig::default());
/// let map = transformer.transform(&OsmMap::default()).unwrap();
/// assert!(map.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Transformer<Proj> {
    projection: Proj,
    config: TransformerConfig,
}

impl<Proj> Transformer<Proj>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d>,
{
    /// Creates a new transformer.
    pub fn new(projection: Proj, config: TransformerConfig) -> Self {
        Self { projection, config }
    }

    /// Configuration of the transformer.
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Transforms all ways and multipolygon relations of the map.
    ///
    /// Geometries are added to the output in the order of the ways and relations in the input. Entities that have
    /// none of the kept tags are skipped.
    ///
    /// # Errors
    ///
    /// Fails if a position of a node cannot be projected.
    pub fn transform(&self, map: &OsmMap) -> Result<MapModel, TopomapOsmError> {
        let mut polylines = vec![];
        let mut polygons = vec![];

        for way in map.ways() {
            match self.transform_way(way)? {
                Some(WayGeometry::PolyLine(polyline)) => polylines.push(polyline),
                Some(WayGeometry::Polygon(polygon)) => polygons.push(polygon),
                None => {}
            }
        }

        for relation in map.relations() {
            if relation.attribute_value(TYPE_TAG) == Some(self.config().multipolygon_type()) {
                polygons.extend(self.assemble_multipolygon(relation)?);
            }
        }

        log::debug!(
            "Transformed {} ways and {} relations into {} polylines and {} polygons",
            map.ways().len(),
            map.relations().len(),
            polylines.len(),
            polygons.len()
        );

        Ok(MapModel::new(polylines, polygons))
    }

    /// Converts a single way into a polyline or a polygon.
    ///
    /// Returns `None` if the way has none of the tags kept for its geometry kind.
    pub fn transform_way(&self, way: &OsmWay) -> Result<Option<WayGeometry>, TopomapOsmError> {
        let class = WayClass::of(way, &self.config);
        let attributes = class.filter(way.attributes(), &self.config);
        if attributes.is_empty() {
            log::trace!("Skipping way {}: no kept attributes", way.id());
            return Ok(None);
        }

        let points = project_nodes(
            way.non_repeating_nodes().iter().map(AsRef::as_ref),
            &self.projection,
        )?;

        let geometry = match class {
            WayClass::OpenLine => WayGeometry::PolyLine(Attributed::new(
                OpenPolyLine::new(points)?.into(),
                attributes,
            )),
            WayClass::ClosedLine => WayGeometry::PolyLine(Attributed::new(
                ClosedPolyLine::new(points)?.into(),
                attributes,
            )),
            WayClass::Area => WayGeometry::Polygon(Attributed::new(
                ClosedPolyLine::new(points)?.into(),
                attributes,
            )),
        };

        Ok(Some(geometry))
    }

    /// Assembles polygons of a multipolygon relation.
    ///
    /// Returns an empty list if the relation has none of the tags kept for polygons, or if its outer rings cannot be
    /// assembled. The order of the returned polygons is not specified.
    pub fn assemble_multipolygon(
        &self,
        relation: &OsmRelation,
    ) -> Result<Vec<Attributed<Polygon>>, TopomapOsmError> {
        let attributes = relation
            .attributes()
            .keep_only_keys(self.config.polygon_keys());
        if attributes.is_empty() {
            log::trace!("Skipping relation {}: no kept attributes", relation.id());
            return Ok(vec![]);
        }

        let outer_rings = self.rings_for_role(relation, OUTER_ROLE)?;
        if outer_rings.is_empty() {
            if relation.ways_with_role(OUTER_ROLE).next().is_some() {
                log::warn!(
                    "Multipolygon relation {} has no valid outer rings",
                    relation.id()
                );
            }
            return Ok(vec![]);
        }

        let inner_rings = self.rings_for_role(relation, INNER_ROLE)?;

        Ok(assemble_polygons(outer_rings, inner_rings)
            .into_iter()
            .map(|polygon| Attributed::new(polygon, attributes.clone()))
            .collect())
    }

    /// Projected rings formed by the way members of the relation with the given role.
    ///
    /// See [`rings_for_role`](crate::rings_for_role).
    pub fn rings_for_role(
        &self,
        relation: &OsmRelation,
        role: &str,
    ) -> Result<Vec<ClosedPolyLine>, TopomapOsmError> {
        ring::rings_for_role(relation, role, &self.projection)
    }
}
