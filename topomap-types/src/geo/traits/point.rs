use crate::error::TopomapTypesError;

/// Point on the surface of a sphere, with coordinates in radians.
pub trait GeoPoint {
    /// Longitude in radians, in `[-π, π]`.
    fn lon(&self) -> f64;
    /// Latitude in radians, in `[-π/2, π/2]`.
    fn lat(&self) -> f64;

    /// Longitude in degrees.
    fn lon_deg(&self) -> f64 {
        self.lon().to_degrees()
    }

    /// Latitude in degrees.
    fn lat_deg(&self) -> f64 {
        self.lat().to_degrees()
    }
}

/// Geo point that can be constructed from its coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a new point from longitude and latitude in radians.
    ///
    /// Fails if any of the coordinates is outside of its domain.
    fn try_lonlat(lon: f64, lat: f64) -> Result<Self, TopomapTypesError>;
}
