use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::TopomapTypesError;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// 2d point on the surface of a sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(try_from = "GeoPoint2dRaw")]
pub struct GeoPoint2d {
    lon: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct GeoPoint2dRaw {
    lon: f64,
    lat: f64,
}

impl TryFrom<GeoPoint2dRaw> for GeoPoint2d {
    type Error = TopomapTypesError;

    fn try_from(value: GeoPoint2dRaw) -> Result<Self, Self::Error> {
        Self::new(value.lon, value.lat)
    }
}

impl GeoPoint2d {
    /// Creates a new point from longitude and latitude in radians.
    pub fn new(lon: f64, lat: f64) -> Result<Self, TopomapTypesError> {
        if !(-PI..=PI).contains(&lon) {
            return Err(TopomapTypesError::InvalidLongitude(lon));
        }
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&lat) {
            return Err(TopomapTypesError::InvalidLatitude(lat));
        }

        Ok(Self { lon, lat })
    }

    /// Creates a new point from longitude and latitude in degrees.
    pub fn from_degrees(lon: f64, lat: f64) -> Result<Self, TopomapTypesError> {
        Self::new(lon.to_radians(), lat.to_radians())
    }
}

impl GeoPoint for GeoPoint2d {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

impl NewGeoPoint for GeoPoint2d {
    fn try_lonlat(lon: f64, lat: f64) -> Result<Self, TopomapTypesError> {
        Self::new(lon, lat)
    }
}
