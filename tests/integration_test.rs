extern crate kml2json;

use approx::assert_relative_eq;
use kml2json::output::Output;
use kml2json::{parse, process, summarize, summarize_strict, Error};
use serde_json::Value;
use std::fs::{read_to_string, File};
use std::io::{Cursor, Read, Seek, SeekFrom};

fn get_string(cursor: &mut Cursor<Vec<u8>>) -> String {
    cursor.seek(SeekFrom::Start(0)).unwrap();
    let mut out = Vec::new();
    cursor.read_to_end(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn summarize_campus_document() {
    let mut cursor = Cursor::new(Vec::new());
    let file = File::open("./tests/data/stations.kml").unwrap();
    process(file, &mut cursor, false, false).unwrap();

    let string = get_string(&mut cursor);
    let lines: Vec<&str> = string.trim().split('\n').collect();
    assert_eq!(lines.len(), 3);

    let rows: Vec<Value> = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let types: Vec<&str> = rows.iter().map(|row| row["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["LineString", "Point", "Polygon"]);
    for row in &rows {
        assert_eq!(row["count"].as_u64().unwrap(), 1);
    }
    assert!(rows[0]["length"].as_f64().unwrap() > 0.);
    assert!(rows[1].get("length").is_none());
    assert!(rows[2].get("length").is_none());
}

#[test]
fn campus_document_as_geojson() {
    let mut cursor = Cursor::new(Vec::new());
    let file = File::open("./tests/data/stations.kml").unwrap();
    process(file, &mut cursor, true, false).unwrap();

    let string = get_string(&mut cursor);
    let geojson: geojson::GeoJson = string.trim().parse().unwrap();
    let collection = match geojson {
        geojson::GeoJson::FeatureCollection(collection) => collection,
        other => panic!("expected a feature collection, got {:?}", other),
    };
    assert_eq!(collection.features.len(), 3);
    let names: Vec<&str> = collection
        .features
        .iter()
        .map(|feature| {
            feature
                .properties
                .as_ref()
                .unwrap()
                .get("name")
                .unwrap()
                .as_str()
                .unwrap()
        })
        .collect();
    assert_eq!(names, vec!["Googleplex", "Charleston Road", "Quad"]);
}

#[test]
fn route_lengths_fold_collection_lines() {
    let raw = read_to_string("./tests/data/routes.kml").unwrap();
    let features = parse(&raw).unwrap();
    let summary = summarize(&features);

    assert_eq!(summary.counts.get("LineString"), Some(&1));
    assert_eq!(summary.counts.get("MultiLineString"), Some(&1));
    assert_eq!(summary.counts.get("GeometryCollection"), Some(&1));

    // the top-level line and the line nested in the collection share
    // the LineString bucket
    assert_relative_eq!(summary.lengths["LineString"], 222.38, max_relative = 0.005);
    assert_relative_eq!(
        summary.lengths["MultiLineString"],
        222.38,
        max_relative = 0.005
    );
    assert!(summary.lengths.get("GeometryCollection").is_none());
}

#[test]
fn strict_route_lengths_stay_in_their_buckets() {
    let raw = read_to_string("./tests/data/routes.kml").unwrap();
    let features = parse(&raw).unwrap();
    let summary = summarize_strict(&features);

    assert_relative_eq!(summary.lengths["LineString"], 111.19, max_relative = 0.005);
    assert_relative_eq!(
        summary.lengths["GeometryCollection"],
        111.19,
        max_relative = 0.005
    );
    assert_relative_eq!(
        summary.lengths["MultiLineString"],
        222.38,
        max_relative = 0.005
    );
}

#[test]
fn features_as_json_lines() {
    let raw = read_to_string("./tests/data/routes.kml").unwrap();
    let features = parse(&raw).unwrap();
    let mut cursor = Cursor::new(Vec::new());
    features.write_json_lines(&mut cursor).unwrap();

    let string = get_string(&mut cursor);
    let lines: Vec<&str> = string.trim().split('\n').collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert!(line.contains(r#""type":"Feature""#));
    }
}

#[test]
fn malformed_document_is_rejected() {
    let result = parse("this is not a kml document");
    assert!(matches!(result, Err(Error::Parse(_))));

    let mut cursor = Cursor::new(Vec::new());
    let broken = Cursor::new(b"<kml><Document></kml></Document>".to_vec());
    assert!(process(broken, &mut cursor, false, false).is_err());
}
