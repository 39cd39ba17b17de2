//! Implementations for some of the common projections.
mod ch1903;
mod equirectangular;
mod web_mercator;

pub use ch1903::Ch1903;
pub use equirectangular::Equirectangular;
pub use web_mercator::WebMercator;
