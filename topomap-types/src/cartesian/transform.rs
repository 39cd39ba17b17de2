use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::error::TopomapTypesError;

/// Axis aligned affine change of coordinates: `x' = sx * x + dx`, `y' = sy * y + dy`.
///
/// The change is defined by two pairs of corresponding points and is used to map projected coordinates onto an
/// image plane (e.g. map bounding box corners onto the pixel corners of a canvas).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedCoordinateChange {
    scale_x: f64,
    offset_x: f64,
    scale_y: f64,
    offset_y: f64,
}

impl AlignedCoordinateChange {
    /// Creates the change that maps `from_1` onto `to_1` and `from_2` onto `to_2`.
    ///
    /// Fails if the two source points share an `x` or a `y` value, since the scale along that axis is then
    /// undefined.
    pub fn new(
        from_1: &impl CartesianPoint2d<Num = f64>,
        to_1: &impl CartesianPoint2d<Num = f64>,
        from_2: &impl CartesianPoint2d<Num = f64>,
        to_2: &impl CartesianPoint2d<Num = f64>,
    ) -> Result<Self, TopomapTypesError> {
        if from_1.x() == from_2.x() || from_1.y() == from_2.y() {
            return Err(TopomapTypesError::DegenerateReference);
        }

        let scale_x = (to_1.x() - to_2.x()) / (from_1.x() - from_2.x());
        let scale_y = (to_1.y() - to_2.y()) / (from_1.y() - from_2.y());

        Ok(Self {
            scale_x,
            offset_x: to_1.x() - scale_x * from_1.x(),
            scale_y,
            offset_y: to_1.y() - scale_y * from_1.y(),
        })
    }

    /// Applies the change to a point.
    pub fn apply<Out: NewCartesianPoint2d<f64>>(
        &self,
        point: &impl CartesianPoint2d<Num = f64>,
    ) -> Out {
        Out::new(
            self.scale_x * point.x() + self.offset_x,
            self.scale_y * point.y() + self.offset_y,
        )
    }
}
