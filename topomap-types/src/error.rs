//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopomapTypesError {
    /// A polyline was constructed from an empty sequence of points.
    #[error("polyline must contain at least one point")]
    EmptyPolyLine,
    /// Longitude is outside of `[-π, π]`.
    #[error("longitude {0} is outside of [-pi, pi]")]
    InvalidLongitude(f64),
    /// Latitude is outside of `[-π/2, π/2]`.
    #[error("latitude {0} is outside of [-pi/2, pi/2]")]
    InvalidLatitude(f64),
    /// Reference points of a coordinate change share an axis value, so the change is undefined.
    #[error("reference points are aligned on one of the axes")]
    DegenerateReference,
}
