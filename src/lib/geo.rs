use super::geojson::Coordinate;
use geo::prelude::*;
use geo_types::LineString;

/// Accumulated great-circle length in kilometers.
pub trait Length {
    fn length(&self) -> f64;
}

impl Length for [Coordinate] {
    fn length(&self) -> f64 {
        let line: LineString<f64> = self.iter().copied().collect();
        line.haversine_length() / 1000.0
    }
}
