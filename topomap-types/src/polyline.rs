//! Open and closed polylines.
//!
//! A polyline is an ordered, non-empty sequence of planar points. [`PolyLine`] is either
//! [open](OpenPolyLine) or [closed](ClosedPolyLine). A closed polyline is implicitly cyclic: its first point is not
//! repeated at the end. Area and point containment are only defined for closed polylines.

use num_traits::{Float, One, Zero};
use serde::{Deserialize, Serialize, Serializer};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::contour::Contour;
use crate::error::TopomapTypesError;

fn validate_points<P>(points: Vec<P>) -> Result<Vec<P>, TopomapTypesError> {
    if points.is_empty() {
        Err(TopomapTypesError::EmptyPolyLine)
    } else {
        Ok(points)
    }
}

/// Polyline whose last point is not connected to the first one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<P>")]
pub struct OpenPolyLine<P = Point2d> {
    points: Vec<P>,
}

impl<P> OpenPolyLine<P> {
    /// Creates a new open polyline. Fails if `points` is empty.
    pub fn new(points: Vec<P>) -> Result<Self, TopomapTypesError> {
        Ok(Self {
            points: validate_points(points)?,
        })
    }

    /// Points of the polyline.
    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P> TryFrom<Vec<P>> for OpenPolyLine<P> {
    type Error = TopomapTypesError;

    fn try_from(points: Vec<P>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<P: Serialize> Serialize for OpenPolyLine<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

impl<P> Contour for OpenPolyLine<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

/// Polyline whose last point is connected to the first one. The first point is not stored twice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<P>")]
pub struct ClosedPolyLine<P = Point2d> {
    points: Vec<P>,
}

impl<P> ClosedPolyLine<P> {
    /// Creates a new closed polyline. Fails if `points` is empty.
    ///
    /// The points must not repeat the first point at the end; the closing segment is implied.
    pub fn new(points: Vec<P>) -> Result<Self, TopomapTypesError> {
        Ok(Self {
            points: validate_points(points)?,
        })
    }

    /// Points of the polyline.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// First point of the polyline.
    pub fn first_point(&self) -> &P {
        &self.points[0]
    }
}

impl<P: CartesianPoint2d> ClosedPolyLine<P> {
    /// Signed area of the ring: positive for counterclockwise rings, negative for clockwise ones.
    pub fn area_signed(&self) -> P::Num {
        let len = self.points.len();
        let mut sum = P::Num::zero();
        for (i, point) in self.points.iter().enumerate() {
            let next = &self.points[(i + 1) % len];
            let prev = &self.points[(i + len - 1) % len];
            sum = sum + point.x() * (next.y() - prev.y());
        }

        sum / (P::Num::one() + P::Num::one())
    }

    /// Area enclosed by the ring.
    pub fn area(&self) -> P::Num {
        Float::abs(self.area_signed())
    }

    /// Direction in which the ring goes around its interior.
    pub fn winding(&self) -> Winding {
        if self.area_signed() <= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Returns true if the `point` lies inside the ring.
    ///
    /// Uses the winding number of the ring around the point. Points on the boundary are classified consistently for
    /// a given ring but may end up on either side.
    pub fn contains_point(&self, point: &impl CartesianPoint2d<Num = P::Num>) -> bool {
        let y = point.y();
        let mut winding_number = 0i64;

        for segment in self.iter_segments() {
            if segment.0.y() <= y {
                if segment.1.y() > y && segment.is_left(point) {
                    winding_number += 1;
                }
            } else if segment.1.y() <= y && segment.reversed().is_left(point) {
                winding_number -= 1;
            }
        }

        winding_number != 0
    }
}

impl<P> TryFrom<Vec<P>> for ClosedPolyLine<P> {
    type Error = TopomapTypesError;

    fn try_from(points: Vec<P>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<P: Serialize> Serialize for ClosedPolyLine<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

impl<P> Contour for ClosedPolyLine<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

/// Direction of a closed polyline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

/// Either an open or a closed polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolyLine<P = Point2d> {
    /// Open polyline.
    Open(OpenPolyLine<P>),
    /// Closed polyline.
    Closed(ClosedPolyLine<P>),
}

impl<P> PolyLine<P> {
    /// Creates an open polyline. Fails if `points` is empty.
    pub fn open(points: Vec<P>) -> Result<Self, TopomapTypesError> {
        Ok(Self::Open(OpenPolyLine::new(points)?))
    }

    /// Creates a closed polyline. Fails if `points` is empty.
    pub fn closed(points: Vec<P>) -> Result<Self, TopomapTypesError> {
        Ok(Self::Closed(ClosedPolyLine::new(points)?))
    }

    /// Points of the polyline. The first point of a closed polyline is not repeated.
    pub fn points(&self) -> &[P] {
        match self {
            Self::Open(v) => v.points(),
            Self::Closed(v) => v.points(),
        }
    }

    /// First point of the polyline.
    pub fn first_point(&self) -> &P {
        &self.points()[0]
    }

    /// Returns the closed polyline, if this is one.
    pub fn as_closed(&self) -> Option<&ClosedPolyLine<P>> {
        match self {
            Self::Open(_) => None,
            Self::Closed(v) => Some(v),
        }
    }
}

impl<P> Contour for PolyLine<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points().iter()
    }
}

impl<P> From<OpenPolyLine<P>> for PolyLine<P> {
    fn from(value: OpenPolyLine<P>) -> Self {
        Self::Open(value)
    }
}

impl<P> From<ClosedPolyLine<P>> for PolyLine<P> {
    fn from(value: ClosedPolyLine<P>) -> Self {
        Self::Closed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use assert_matches::assert_matches;

    fn unit_square() -> ClosedPolyLine {
        ClosedPolyLine::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_points() {
        assert_matches!(
            ClosedPolyLine::<Point2d>::new(vec![]),
            Err(TopomapTypesError::EmptyPolyLine)
        );
        assert_matches!(
            PolyLine::<Point2d>::open(vec![]),
            Err(TopomapTypesError::EmptyPolyLine)
        );
    }

    #[test]
    fn deserialize_rejects_empty() {
        let result = serde_json::from_str::<ClosedPolyLine>("[]");
        assert!(result.is_err());

        let line: OpenPolyLine = serde_json::from_str("[[1.0, 2.0]]").unwrap();
        assert_eq!(line.points(), &[Point2d::new(1.0, 2.0)]);
        assert_eq!(serde_json::to_string(&line).unwrap(), "[[1.0,2.0]]");
    }

    #[test]
    fn iter_points_closing() {
        let line = PolyLine::open(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]).unwrap();
        assert_eq!(line.iter_points_closing().count(), 2);
        assert_eq!(
            *line.iter_points_closing().last().unwrap(),
            Point2d::new(1.0, 1.0)
        );

        let line = PolyLine::closed(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]).unwrap();
        assert_eq!(line.iter_points_closing().count(), 3);
        assert_eq!(
            *line.iter_points_closing().last().unwrap(),
            Point2d::new(0.0, 0.0)
        );
    }

    #[test]
    fn iter_segments() {
        let line = PolyLine::open(vec![Point2d::new(0.0, 0.0)]).unwrap();
        assert_eq!(line.iter_segments().count(), 0);

        let line = PolyLine::open(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]).unwrap();
        assert_eq!(line.iter_segments().count(), 1);

        let line = PolyLine::closed(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]).unwrap();
        assert_eq!(line.iter_segments().count(), 2);
        assert_eq!(
            line.iter_segments().last().unwrap(),
            Segment(&Point2d::new(1.0, 1.0), &Point2d::new(0.0, 0.0))
        );
    }

    #[test]
    fn first_point() {
        let line = PolyLine::open(vec![Point2d::new(3.0, 4.0), Point2d::new(1.0, 1.0)]).unwrap();
        assert_eq!(*line.first_point(), Point2d::new(3.0, 4.0));
        assert!(!line.is_closed());
        assert!(line.as_closed().is_none());
    }

    #[test]
    fn area() {
        assert_eq!(unit_square().area(), 1.0);
        assert_eq!(unit_square().area_signed(), 1.0);

        let clockwise = ClosedPolyLine::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 2.0),
            Point2d::new(3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(clockwise.area_signed(), -3.0);
        assert_eq!(clockwise.area(), 3.0);
    }

    #[test]
    fn area_is_independent_of_start_point() {
        let shifted = ClosedPolyLine::new(vec![
            Point2d::new(1.0, 1.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(shifted.area(), unit_square().area());
    }

    #[test]
    fn winding() {
        assert_eq!(unit_square().winding(), Winding::CounterClockwise);

        let clockwise = ClosedPolyLine::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(clockwise.winding(), Winding::Clockwise);
    }

    #[test]
    fn contains_point() {
        let square = unit_square();

        assert!(square.contains_point(&Point2d::new(0.5, 0.5)));
        assert!(square.contains_point(&Point2d::new(0.1, 0.9)));
        assert!(!square.contains_point(&Point2d::new(1.5, 0.5)));
        assert!(!square.contains_point(&Point2d::new(-0.5, 0.5)));
        assert!(!square.contains_point(&Point2d::new(0.5, 1.5)));
        assert!(!square.contains_point(&Point2d::new(0.5, -0.5)));
    }

    #[test]
    fn contains_point_clockwise() {
        let triangle = ClosedPolyLine::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 4.0),
            Point2d::new(4.0, 0.0),
        ])
        .unwrap();

        assert!(triangle.contains_point(&Point2d::new(1.0, 1.0)));
        assert!(!triangle.contains_point(&Point2d::new(3.0, 3.0)));
    }

    #[test]
    fn contains_point_concave() {
        // U-shaped ring, the notch is between x = 1 and x = 2 above y = 1.
        let ring = ClosedPolyLine::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(3.0, 0.0),
            Point2d::new(3.0, 3.0),
            Point2d::new(2.0, 3.0),
            Point2d::new(2.0, 1.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(1.0, 3.0),
            Point2d::new(0.0, 3.0),
        ])
        .unwrap();

        assert!(ring.contains_point(&Point2d::new(0.5, 2.0)));
        assert!(ring.contains_point(&Point2d::new(2.5, 2.0)));
        assert!(ring.contains_point(&Point2d::new(1.5, 0.5)));
        assert!(!ring.contains_point(&Point2d::new(1.5, 2.0)));
    }

    #[test]
    fn boundary_points_are_stable() {
        let square = unit_square();
        let boundary = Point2d::new(0.0, 0.5);
        let first = square.contains_point(&boundary);
        for _ in 0..3 {
            assert_eq!(square.contains_point(&boundary), first);
        }
    }
}
