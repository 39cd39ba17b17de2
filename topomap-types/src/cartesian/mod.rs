//! Types and functions on geometries in cartesian coordinates.

mod orient;
mod point;
mod transform;

pub use orient::{signed_triangle_area, Orientation};
pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2, Point2d};
pub use transform::AlignedCoordinateChange;
