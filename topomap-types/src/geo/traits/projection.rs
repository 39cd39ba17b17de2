/// Conversion between two coordinate spaces, usually from the sphere to a plane.
///
/// For every point `p` in the domain, `unproject(project(p))` is expected to be equal to `p` within the accuracy
/// of the projection.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the projected point.
    type OutPoint;

    /// Projects a point. Returns `None` if the point cannot be projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Inverse of [`Projection::project`]. Returns `None` if the point is outside of the domain of the inverse.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
