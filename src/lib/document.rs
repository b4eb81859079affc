use super::geojson::{Coordinate, Feature, FeatureSet, Geometry};
use super::Error;
use kml::types::{Coord, Geometry as KmlGeometry, MultiGeometry, Placemark};
use kml::Kml;
use std::collections::HashMap;

/// Parse a KML document into a list of GeoJSON-like features.
///
/// Placemarks are collected in document order, descending into folders
/// recursively. Geometry kinds outside the supported set are skipped,
/// as are placemarks without any supported geometry.
///
/// # Example
///
/// ```
/// use kml2json::parse;
///
/// let raw = r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document>
///   <Placemark><Point><coordinates>-122.082,37.422</coordinates></Point></Placemark>
/// </Document></kml>"#;
/// let features = parse(raw).unwrap();
/// assert_eq!(features.len(), 1);
/// ```
pub fn parse(raw: &str) -> Result<FeatureSet, Error> {
    let document: Kml = raw.parse()?;
    let mut features = Vec::new();
    collect_features(&document, &mut features);
    Ok(features)
}

fn collect_features(node: &Kml, features: &mut Vec<Feature>) {
    match node {
        Kml::KmlDocument(document) => {
            for element in &document.elements {
                collect_features(element, features);
            }
        }
        Kml::Document { elements, .. } => {
            for element in elements {
                collect_features(element, features);
            }
        }
        Kml::Folder(folder) => {
            for element in &folder.elements {
                collect_features(element, features);
            }
        }
        Kml::Placemark(placemark) => features.extend(convert_placemark(placemark)),
        _ => {}
    }
}

fn convert_placemark(placemark: &Placemark) -> Option<Feature> {
    let geometry = placemark.geometry.as_ref().and_then(convert_geometry)?;
    let mut properties = HashMap::new();
    if let Some(name) = &placemark.name {
        properties.insert("name".to_string(), name.clone());
    }
    if let Some(description) = &placemark.description {
        properties.insert("description".to_string(), description.clone());
    }
    Some(Feature {
        geometry,
        properties,
    })
}

fn convert_geometry(geometry: &KmlGeometry) -> Option<Geometry> {
    match geometry {
        KmlGeometry::Point(point) => Some(Geometry::Point {
            coordinates: (point.coord.x, point.coord.y),
        }),
        KmlGeometry::LineString(line) => Some(Geometry::LineString {
            coordinates: line_coordinates(&line.coords),
        }),
        KmlGeometry::Polygon(polygon) => {
            let mut rings = vec![line_coordinates(&polygon.outer.coords)];
            rings.extend(
                polygon
                    .inner
                    .iter()
                    .map(|ring| line_coordinates(&ring.coords)),
            );
            Some(Geometry::Polygon {
                coordinates: rings,
            })
        }
        KmlGeometry::MultiGeometry(multi) => Some(convert_multi(multi)),
        _ => {
            log::trace!("skipping unsupported geometry element");
            None
        }
    }
}

// A multi geometry of nothing but lines becomes a MultiLineString,
// anything heterogeneous becomes a GeometryCollection.
fn convert_multi(multi: &MultiGeometry) -> Geometry {
    let children: Vec<Geometry> = multi
        .geometries
        .iter()
        .filter_map(convert_geometry)
        .collect();
    let all_lines = !children.is_empty()
        && children
            .iter()
            .all(|child| matches!(child, Geometry::LineString { .. }));
    if all_lines {
        let coordinates = children
            .into_iter()
            .filter_map(|child| match child {
                Geometry::LineString { coordinates } => Some(coordinates),
                _ => None,
            })
            .collect();
        return Geometry::MultiLineString { coordinates };
    }
    Geometry::GeometryCollection {
        geometries: children,
    }
}

fn line_coordinates(coords: &[Coord]) -> Vec<Coordinate> {
    coords.iter().map(|coord| (coord.x, coord.y)).collect()
}
