use std::marker::PhantomData;

use crate::cartesian::NewCartesianPoint2d;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Swiss national grid (CH1903 / LV03).
///
/// Uses the approximate formulas published by swisstopo, which are accurate to about a meter inside of
/// Switzerland. The output is in meters, with Bern at approximately `(600000, 200000)`.
#[derive(Debug, Clone, Copy)]
pub struct Ch1903<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Ch1903<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for Ch1903<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: NewGeoPoint, Out: NewCartesianPoint2d<f64>> Projection for Ch1903<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let lambda = 1e-4 * (input.lon_deg() * SECONDS_PER_DEGREE - 26782.5);
        let phi = 1e-4 * (input.lat_deg() * SECONDS_PER_DEGREE - 169028.66);

        let lambda2 = lambda * lambda;
        let phi2 = phi * phi;

        let x = 600072.37 + 211455.93 * lambda
            - 10938.51 * lambda * phi
            - 0.36 * lambda * phi2
            - 44.54 * lambda2 * lambda;
        let y = 200147.07 + 308807.95 * phi + 3745.25 * lambda2 + 76.63 * phi2
            - 194.56 * lambda2 * phi
            + 119.79 * phi2 * phi;

        Some(Out::new(x, y))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        const TO_DEGREES: f64 = 100.0 / 36.0;

        let x = (input.x() - 600000.0) / 1e6;
        let y = (input.y() - 200000.0) / 1e6;
        let x2 = x * x;
        let y2 = y * y;

        let lambda = 2.6779094 + 4.728982 * x + 0.791484 * x * y + 0.1306 * x * y2
            - 0.0436 * x2 * x;
        let phi = 16.9023892 + 3.238272 * y
            - 0.270978 * x2
            - 0.002528 * y2
            - 0.0447 * x2 * y
            - 0.0140 * y2 * y;

        In::try_lonlat(
            (lambda * TO_DEGREES).to_radians(),
            (phi * TO_DEGREES).to_radians(),
        )
        .ok()
    }
}
