use crate::data::DataError;
use geo::{Geometry, MultiPolygon, Polygon};
use geojson::GeoJson;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One named boundary region, reduced to its exterior rings in
/// longitude/latitude order. Consumed once to draw the base map and
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct StateOutline {
    pub name: String,
    pub rings: Vec<Vec<(f64, f64)>>,
}

/// Load the state FeatureCollection from a GeoJSON file.
pub fn load_topology(path: &Path) -> Result<Vec<StateOutline>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let geojson = GeoJson::from_reader(BufReader::new(file))
        .map_err(|e| DataError::Topology(e.to_string()))?;
    parse_topology(geojson)
}

pub fn parse_topology(geojson: GeoJson) -> Result<Vec<StateOutline>, DataError> {
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(DataError::Topology(
            "topology must be a FeatureCollection".to_string(),
        ));
    };

    let mut outlines = Vec::new();
    for feature in collection.features {
        let name = feature
            .properties
            .as_ref()
            .and_then(|props| props.get("name").or_else(|| props.get("NAME")))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        let Some(geometry) = feature.geometry else {
            continue;
        };
        let geometry: Geometry<f64> = geometry
            .value
            .try_into()
            .map_err(|e: geojson::Error| DataError::Topology(e.to_string()))?;

        let polygons: MultiPolygon<f64> = match geometry {
            Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
            Geometry::MultiPolygon(multi) => multi,
            // Points and lines carry no boundary to draw.
            _ => continue,
        };

        outlines.push(StateOutline {
            name,
            rings: polygons.iter().map(exterior_ring).collect(),
        });
    }
    Ok(outlines)
}

fn exterior_ring(polygon: &Polygon<f64>) -> Vec<(f64, f64)> {
    polygon.exterior().coords().map(|c| (c.x, c.y)).collect()
}
