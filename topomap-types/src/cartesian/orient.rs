use crate::cartesian::CartesianPoint2d;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// A counterclockwise triplet `(p, q, r)` means that `p` lies strictly to the left of the directed line `q → r`.
    pub fn triplet<Num: Float>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        let area = signed_triangle_area(p, q, r);
        if area > Num::zero() {
            Self::Counterclockwise
        } else if area < Num::zero() {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}

/// Signed area of the triangle `(a, b, c)`. Positive when the vertices go counterclockwise.
pub fn signed_triangle_area<Num: Float>(
    a: &impl CartesianPoint2d<Num = Num>,
    b: &impl CartesianPoint2d<Num = Num>,
    c: &impl CartesianPoint2d<Num = Num>,
) -> Num {
    let double_area = (b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y());
    double_area / (Num::one() + Num::one())
}
