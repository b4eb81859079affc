use self::output::Output;
use std::io::{Read, Write};

mod document;
mod geo;
pub mod geojson;
pub mod output;
pub mod summary;

pub use self::document::parse;
pub use self::geo::Length;
pub use self::geojson::{Coordinate, Feature, FeatureSet, Geometry};
pub use self::summary::{summarize, summarize_strict, Summary};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The raw text is not well-formed markup, or no geometry schema
    /// could be derived from it.
    #[error("could not parse KML document: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<kml::Error> for Error {
    fn from(e: kml::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

/// Run the pipeline on one KML document: parse it and write either the
/// per-type summary rows or the features as a GeoJSON FeatureCollection.
pub fn process(
    mut file: impl Read,
    writer: &mut dyn Write,
    geojson: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut raw = String::new();
    file.read_to_string(&mut raw)?;
    let features = parse(&raw)?;
    log::debug!("parsed {} features", features.len());
    if geojson {
        return features.write_geojson(writer);
    }
    let summary = if strict {
        summarize_strict(&features)
    } else {
        summarize(&features)
    };
    summary.write_json_lines(writer)
}
