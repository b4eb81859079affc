use super::geojson::{Entity, Feature};
use super::summary::Summary;
use serde::{Deserialize, Serialize};
use serde_json::to_string;
use std::collections::BTreeSet;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

impl Output for Vec<Feature> {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for feature in self.iter() {
            let entity = Entity::from(feature);
            let json = to_string(&entity)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self.iter().map(Entity::from).collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct JSONSummaryRow {
    #[serde(rename = "type")]
    geometry_type: String,
    count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
}

impl Output for Summary {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        // lengths may hold a bucket without a counted feature (folded
        // collection lines), so the rows cover the union of both maps
        let mut geometry_types: BTreeSet<&String> = self.counts.keys().collect();
        geometry_types.extend(self.lengths.keys());
        for geometry_type in geometry_types {
            let count = self.counts.get(geometry_type).copied().unwrap_or(0);
            let length = self.lengths.get(geometry_type).copied();
            let row = JSONSummaryRow {
                geometry_type: geometry_type.clone(),
                count,
                length,
            };
            let json = to_string(&row)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, _writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        unimplemented!();
    }
}
