use std::marker::PhantomData;

use crate::cartesian::NewCartesianPoint2d;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Projection that uses longitude and latitude in radians as `x` and `y` coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Equirectangular<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Equirectangular<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for Equirectangular<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: NewGeoPoint, Out: NewCartesianPoint2d<f64>> Projection for Equirectangular<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        Some(Out::new(input.lon(), input.lat()))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        In::try_lonlat(input.x(), input.y()).ok()
    }
}
