//! Conversion of OpenStreetMap topology (nodes, ways and relations) into a flat map of projected, attributed
//! polylines and polygons.
//!
//! The entry point is the [`Transformer`]. It goes over all ways of an [`OsmMap`]:
//! * ways that are not closed become open polylines,
//! * closed ways are classified by their tags (see [`WayClass`]) into areas, which become polygons, and boundary
//!   lines, which become closed polylines.
//!
//! After that, every multipolygon relation is assembled into polygons with holes: way members with the `outer` and
//! `inner` roles are joined into rings (see [`rings_for_role`]), and then every hole is matched to the outer ring
//! that contains it (see [`assemble_polygons`]).
//!
//! Only the tags listed in the [`TransformerConfig`] are kept on the output geometries. Entities left without any
//! tags are not included in the output.

pub use topomap_types;

mod classify;
mod config;
mod entity;
pub mod error;
mod graph;
mod polygon;
mod project;
mod ring;
mod transformer;

pub use classify::WayClass;
pub use config::TransformerConfig;
pub use entity::{Member, MemberTarget, MemberType, OsmMap, OsmNode, OsmRelation, OsmWay};
pub use graph::Graph;
pub use polygon::assemble_polygons;
pub use ring::rings_for_role;
pub use transformer::{Transformer, WayGeometry};
