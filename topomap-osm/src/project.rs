use topomap_types::cartesian::Point2d;
use topomap_types::geo::{GeoPoint2d, Projection};

use crate::entity::OsmNode;
use crate::error::TopomapOsmError;

/// Projects positions of the nodes, failing on the first node the projection cannot handle.
pub(crate) fn project_nodes<'a, Proj>(
    nodes: impl IntoIterator<Item = &'a OsmNode>,
    projection: &Proj,
) -> Result<Vec<Point2d>, TopomapOsmError>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    nodes
        .into_iter()
        .map(|node| {
            projection
                .project(node.position())
                .ok_or(TopomapOsmError::Projection { node_id: node.id() })
        })
        .collect()
}
