//! Points on the sphere (see [`GeoPoint`]) and conversion of them to the projected plane (see [`Projection`]).

mod datum;
pub mod impls;
mod traits;

pub use datum::Datum;
pub use impls::GeoPoint2d;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
