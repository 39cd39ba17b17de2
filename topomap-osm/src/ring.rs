//! Assembly of closed rings from the way members of a relation.

use ahash::HashMap;
use topomap_types::cartesian::Point2d;
use topomap_types::geo::{GeoPoint2d, Projection};
use topomap_types::ClosedPolyLine;

use crate::entity::{OsmNode, OsmRelation, OsmWay};
use crate::error::TopomapOsmError;
use crate::graph::Graph;
use crate::project::project_nodes;

/// Builds the rings formed by the way members of the `relation` with the given `role`.
///
/// Ways are joined at shared nodes regardless of the order of the members and of the direction of the ways. Every
/// node of the joined ways must connect exactly two segments. If this is not the case, the ways cannot be split into
/// rings unambiguously and an empty list is returned.
///
/// The order of the returned rings is not specified.
///
/// # Errors
///
/// Fails if the projection cannot project one of the ring nodes.
pub fn rings_for_role<Proj>(
    relation: &OsmRelation,
    role: &str,
    projection: &Proj,
) -> Result<Vec<ClosedPolyLine>, TopomapOsmError>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    let ways: Vec<&OsmWay> = relation.ways_with_role(role).collect();
    let nodes: HashMap<i64, &OsmNode> = ways
        .iter()
        .flat_map(|way| way.nodes())
        .map(|node| (node.id(), node.as_ref()))
        .collect();

    let graph = Graph::from_paths(
        ways.iter()
            .map(|way| way.nodes().iter().map(|node| node.id())),
    );

    let Some(cycles) = graph.cycles() else {
        if let Some(node_id) = graph.irregular_node() {
            let neighbors: Vec<i64> = graph
                .neighbors_of(&node_id)
                .into_iter()
                .flatten()
                .copied()
                .collect();
            log::debug!(
                "Relation {}: node {node_id} of '{role}' rings has {} neighbors {neighbors:?}",
                relation.id(),
                graph.degree(&node_id).unwrap_or_default(),
            );
        }

        return Ok(vec![]);
    };

    cycles
        .iter()
        .map(|cycle| {
            let points = project_nodes(
                cycle.iter().filter_map(|id| nodes.get(id).copied()),
                projection,
            )?;
            Ok(ClosedPolyLine::new(points)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;
    use topomap_types::geo::impls::projection::Equirectangular;
    use topomap_types::Attributes;

    use super::*;
    use crate::entity::{Member, MemberTarget};

    struct Nodes(HashMap<i64, Arc<OsmNode>>);

    impl Nodes {
        fn new(coords: &[(i64, f64, f64)]) -> Self {
            Self(
                coords
                    .iter()
                    .map(|&(id, lon, lat)| {
                        let position = GeoPoint2d::new(lon, lat).unwrap();
                        (id, Arc::new(OsmNode::new(id, position, Attributes::empty())))
                    })
                    .collect(),
            )
        }

        fn way(&self, id: i64, node_ids: &[i64]) -> Arc<OsmWay> {
            let nodes = node_ids.iter().map(|id| self.0[id].clone()).collect();
            Arc::new(OsmWay::new(id, nodes, Attributes::empty()).unwrap())
        }
    }

    fn projection() -> Equirectangular<GeoPoint2d, Point2d> {
        Equirectangular::new()
    }

    fn relation(members: Vec<(&str, Arc<OsmWay>)>) -> OsmRelation {
        OsmRelation::new(
            1,
            members
                .into_iter()
                .map(|(role, way)| Member::new(role, MemberTarget::Way(way)))
                .collect(),
            [("type", "multipolygon")].into_iter().collect(),
        )
    }

    fn square_nodes() -> Nodes {
        Nodes::new(&[
            (1, 0.0, 0.0),
            (2, 0.1, 0.0),
            (3, 0.1, 0.1),
            (4, 0.0, 0.1),
            (5, 0.02, 0.02),
            (6, 0.04, 0.02),
            (7, 0.04, 0.04),
            (8, 0.02, 0.04),
        ])
    }

    #[test]
    fn single_closed_way() {
        let nodes = square_nodes();
        let relation = relation(vec![("outer", nodes.way(1, &[1, 2, 3, 4, 1]))]);

        let rings = rings_for_role(&relation, "outer", &projection()).unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].points().len(), 4);
        assert_abs_diff_eq!(rings[0].area(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn ring_from_segments() {
        let nodes = square_nodes();
        let relation = relation(vec![
            ("outer", nodes.way(1, &[3, 4, 1])),
            ("outer", nodes.way(2, &[3, 2, 1])),
        ]);

        let rings = rings_for_role(&relation, "outer", &projection()).unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].points().len(), 4);
        assert_abs_diff_eq!(rings[0].area(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn roles_are_separated() {
        let nodes = square_nodes();
        let relation = relation(vec![
            ("outer", nodes.way(1, &[1, 2, 3, 4, 1])),
            ("inner", nodes.way(2, &[5, 6, 7, 8, 5])),
        ]);

        let projection = projection();
        let outer = rings_for_role(&relation, "outer", &projection).unwrap();
        let inner = rings_for_role(&relation, "inner", &projection).unwrap();

        assert_eq!(outer.len(), 1);
        assert_eq!(inner.len(), 1);
        assert_abs_diff_eq!(inner[0].area(), 0.0004, epsilon = 1e-12);
        assert!(rings_for_role(&relation, "label", &projection)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn several_rings() {
        let nodes = square_nodes();
        let relation = relation(vec![
            ("outer", nodes.way(1, &[1, 2, 3, 4, 1])),
            ("outer", nodes.way(2, &[5, 6, 7])),
            ("outer", nodes.way(3, &[7, 8, 5])),
        ]);

        let rings = rings_for_role(&relation, "outer", &projection()).unwrap();
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.points().len() == 4));
    }

    #[test]
    fn unclosed_ring() {
        let nodes = square_nodes();
        let relation = relation(vec![
            ("outer", nodes.way(1, &[1, 2, 3])),
            ("outer", nodes.way(2, &[3, 4])),
        ]);

        let rings = rings_for_role(&relation, "outer", &projection()).unwrap();
        assert!(rings.is_empty());
    }

    #[test]
    fn branching_ring() {
        let nodes = square_nodes();
        let relation = relation(vec![
            ("outer", nodes.way(1, &[1, 2, 3, 4, 1])),
            ("outer", nodes.way(2, &[2, 4])),
        ]);

        let rings = rings_for_role(&relation, "outer", &projection()).unwrap();
        assert!(rings.is_empty());
    }
}
