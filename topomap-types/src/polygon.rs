//! Polygon with holes.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::polyline::ClosedPolyLine;

/// Polygon geometry. Polygon consists of one outer ring (the *shell*) and zero or more inner rings (*holes*).
///
/// Holes are expected to lie inside the shell and not to overlap with each other. This is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P = Point2d> {
    shell: ClosedPolyLine<P>,
    holes: Vec<ClosedPolyLine<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(shell: ClosedPolyLine<P>, holes: Vec<ClosedPolyLine<P>>) -> Self {
        Self { shell, holes }
    }

    /// Outer ring of the polygon.
    pub fn shell(&self) -> &ClosedPolyLine<P> {
        &self.shell
    }

    /// Inner rings of the polygon.
    pub fn holes(&self) -> &[ClosedPolyLine<P>] {
        &self.holes
    }

    /// Iterates over all rings of the polygon starting with the shell.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ ClosedPolyLine<P>> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }
}

impl<P: CartesianPoint2d> Polygon<P> {
    /// Area of the shell minus the areas of the holes.
    pub fn area(&self) -> P::Num {
        self.holes
            .iter()
            .fold(self.shell.area(), |area, hole| area - hole.area())
    }

    /// Returns true if the `point` is inside the shell and outside of every hole.
    pub fn contains_point(&self, point: &impl CartesianPoint2d<Num = P::Num>) -> bool {
        self.shell.contains_point(point) && !self.holes.iter().any(|h| h.contains_point(point))
    }
}

impl<P> From<ClosedPolyLine<P>> for Polygon<P> {
    fn from(value: ClosedPolyLine<P>) -> Self {
        Self {
            shell: value,
            holes: vec![],
        }
    }
}
