use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Longitude/latitude pair in GeoJSON axis order.
pub type Coordinate = (f64, f64);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Coordinate,
    },
    LineString {
        coordinates: Vec<Coordinate>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Coordinate>>,
    },
    Polygon {
        coordinates: Vec<Vec<Coordinate>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// GeoJSON type label, used as the summary bucket key.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: HashMap<String, String>,
}

/// The features of one parsed document, in document order.
pub type FeatureSet = Vec<Feature>;

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        properties: HashMap<String, String>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

impl From<&Feature> for Entity {
    fn from(feature: &Feature) -> Self {
        Entity::Feature {
            properties: feature.properties.clone(),
            geometry: feature.geometry.clone(),
        }
    }
}
