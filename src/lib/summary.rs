use super::geo::Length;
use super::geojson::{Feature, Geometry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-type occurrence counts and accumulated lengths (in kilometers)
/// of one feature set.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Summary {
    pub counts: BTreeMap<String, u64>,
    pub lengths: BTreeMap<String, f64>,
}

impl Summary {
    fn count(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    fn add_length(&mut self, label: &str, kilometers: f64) {
        *self.lengths.entry(label.to_string()).or_insert(0.) += kilometers;
    }
}

/// Walk a feature set once, counting features per geometry type and
/// accumulating the great-circle lengths of linear geometries.
///
/// LineStrings nested in a GeometryCollection are accounted to the flat
/// `LineString` bucket, the way the measurement has historically been
/// reported. Use [`summarize_strict`] to keep them separate.
pub fn summarize(features: &[Feature]) -> Summary {
    accumulate(features, false)
}

/// Like [`summarize`], but lengths of LineStrings nested in a
/// GeometryCollection are accounted to the `GeometryCollection` bucket.
pub fn summarize_strict(features: &[Feature]) -> Summary {
    accumulate(features, true)
}

fn accumulate(features: &[Feature], strict: bool) -> Summary {
    let mut summary = Summary::default();
    for feature in features {
        let geometry = &feature.geometry;
        summary.count(geometry.type_name());
        match geometry {
            Geometry::LineString { coordinates } => {
                summary.add_length("LineString", coordinates.length());
            }
            Geometry::MultiLineString { coordinates } => {
                let total = coordinates.iter().map(|line| line.length()).sum();
                summary.add_length("MultiLineString", total);
            }
            Geometry::GeometryCollection { geometries } => {
                // only immediate children are measured, nested
                // collections are not descended into
                for child in geometries {
                    if let Geometry::LineString { coordinates } = child {
                        let label = if strict {
                            "GeometryCollection"
                        } else {
                            "LineString"
                        };
                        summary.add_length(label, coordinates.length());
                    }
                }
            }
            Geometry::Point { .. } | Geometry::Polygon { .. } => {}
        }
    }
    summary
}
