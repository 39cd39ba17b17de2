use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points, directed from `.0` to `.1`.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Returns the segment with the same end points going in the opposite direction.
    pub fn reversed(&self) -> Segment<'a, P> {
        Segment(self.1, self.0)
    }

    /// Returns true if the `point` lies strictly to the left of the directed line through the segment.
    pub fn is_left(&self, point: &impl CartesianPoint2d<Num = P::Num>) -> bool {
        Orientation::triplet(point, self.0, self.1) == Orientation::Counterclockwise
    }
}
