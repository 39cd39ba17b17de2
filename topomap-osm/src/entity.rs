//! Topological map entities: nodes, ways and relations.
//!
//! Entities are produced by a reader of the topological data and are immutable. Entities referencing other entities
//! share them through [`Arc`]; two references point to the same entity if they have the same id.

use std::sync::Arc;

use topomap_types::geo::GeoPoint2d;
use topomap_types::Attributes;

use crate::error::TopomapOsmError;

/// Point of the map with a position on the sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmNode {
    id: i64,
    position: GeoPoint2d,
    attributes: Attributes,
}

impl OsmNode {
    /// Creates a new node.
    pub fn new(id: i64, position: GeoPoint2d, attributes: Attributes) -> Self {
        Self {
            id,
            position,
            attributes,
        }
    }

    /// Id of the node.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Position of the node.
    pub fn position(&self) -> &GeoPoint2d {
        &self.position
    }

    /// Tags of the node.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns true if the node has a tag with the given key.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    /// Value of the tag with the given key.
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }
}

/// Ordered sequence of nodes.
///
/// A way is closed if its first and last nodes are the same node.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmWay {
    id: i64,
    nodes: Vec<Arc<OsmNode>>,
    attributes: Attributes,
}

impl OsmWay {
    /// Creates a new way. Fails if less than two nodes are given.
    pub fn new(
        id: i64,
        nodes: Vec<Arc<OsmNode>>,
        attributes: Attributes,
    ) -> Result<Self, TopomapOsmError> {
        if nodes.len() < 2 {
            return Err(TopomapOsmError::WayTooShort {
                way_id: id,
                count: nodes.len(),
            });
        }

        Ok(Self {
            id,
            nodes,
            attributes,
        })
    }

    /// Id of the way.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Tags of the way.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns true if the way has a tag with the given key.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    /// Value of the tag with the given key.
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// All nodes of the way. For closed ways the first node is repeated at the end.
    pub fn nodes(&self) -> &[Arc<OsmNode>] {
        &self.nodes
    }

    /// Number of nodes of the way, including the repeated node of closed ways.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes of the way without the repeated last node of closed ways.
    pub fn non_repeating_nodes(&self) -> &[Arc<OsmNode>] {
        if self.is_closed() {
            &self.nodes[..self.nodes.len() - 1]
        } else {
            &self.nodes
        }
    }

    /// First node of the way.
    pub fn first_node(&self) -> &Arc<OsmNode> {
        &self.nodes[0]
    }

    /// Last node of the way.
    pub fn last_node(&self) -> &Arc<OsmNode> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Returns true if the first and the last nodes are the same node.
    pub fn is_closed(&self) -> bool {
        self.first_node().id() == self.last_node().id()
    }
}

/// Kind of the entity a relation member refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberType {
    /// Node
    Node,
    /// Way
    Way,
    /// Relation
    Relation,
}

/// Entity referenced by a relation member.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberTarget {
    /// Node member.
    Node(Arc<OsmNode>),
    /// Way member.
    Way(Arc<OsmWay>),
    /// Relation member.
    Relation(Arc<OsmRelation>),
}

/// Member of a relation: an entity with a role.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    role: String,
    target: MemberTarget,
}

impl Member {
    /// Creates a new member.
    pub fn new(role: impl Into<String>, target: MemberTarget) -> Self {
        Self {
            role: role.into(),
            target,
        }
    }

    /// Role of the member in the relation, e.g. `outer` or `inner`.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Referenced entity.
    pub fn target(&self) -> &MemberTarget {
        &self.target
    }

    /// Kind of the referenced entity.
    pub fn member_type(&self) -> MemberType {
        match self.target {
            MemberTarget::Node(_) => MemberType::Node,
            MemberTarget::Way(_) => MemberType::Way,
            MemberTarget::Relation(_) => MemberType::Relation,
        }
    }

    /// Referenced way, if the member is a way.
    pub fn as_way(&self) -> Option<&OsmWay> {
        match &self.target {
            MemberTarget::Way(way) => Some(way.as_ref()),
            _ => None,
        }
    }
}

/// Ordered collection of members with roles.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmRelation {
    id: i64,
    members: Vec<Member>,
    attributes: Attributes,
}

impl OsmRelation {
    /// Creates a new relation.
    pub fn new(id: i64, members: Vec<Member>, attributes: Attributes) -> Self {
        Self {
            id,
            members,
            attributes,
        }
    }

    /// Id of the relation.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Members of the relation in their original order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Tags of the relation.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns true if the relation has a tag with the given key.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    /// Value of the tag with the given key.
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Ways that are members of the relation with the given role.
    pub fn ways_with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a OsmWay> {
        self.members
            .iter()
            .filter(move |m| m.role() == role)
            .filter_map(Member::as_way)
    }
}

/// Ways and relations of a map, as produced by the reader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsmMap {
    ways: Vec<Arc<OsmWay>>,
    relations: Vec<Arc<OsmRelation>>,
}

impl OsmMap {
    /// Creates a new map. The order of ways and relations is preserved.
    pub fn new(ways: Vec<Arc<OsmWay>>, relations: Vec<Arc<OsmRelation>>) -> Self {
        Self { ways, relations }
    }

    /// Ways of the map.
    pub fn ways(&self) -> &[Arc<OsmWay>] {
        &self.ways
    }

    /// Relations of the map.
    pub fn relations(&self) -> &[Arc<OsmRelation>] {
        &self.relations
    }
}
