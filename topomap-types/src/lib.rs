//! Geometric building blocks of a flattened vector map.
//!
//! The crate contains:
//! * planar points ([`cartesian::Point2d`]) and the [`CartesianPoint2d`](cartesian::CartesianPoint2d) trait,
//! * open and closed polylines ([`PolyLine`], [`ClosedPolyLine`]) and polygons with holes ([`Polygon`]),
//! * points on the sphere ([`geo::GeoPoint2d`]) and the [`Projection`](geo::Projection) contract with a few
//!   concrete projections,
//! * attribute sets ([`Attributes`]) that are attached to every output geometry with [`Attributed`],
//! * the [`MapModel`], an immutable collection of attributed polylines and polygons.

pub mod attributes;
pub use attributes::{Attributed, Attributes};

pub mod cartesian;

pub mod contour;
pub use contour::Contour;

pub mod error;
pub mod geo;

mod map;
pub use map::MapModel;

pub mod polygon;
pub use polygon::Polygon;

pub mod polyline;
pub use polyline::{ClosedPolyLine, OpenPolyLine, PolyLine, Winding};

pub mod segment;
