use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// top-level Overpass JSON document. only the `elements` list is read;
/// the metadata fields Overpass adds alongside it are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// one element of an Overpass response. `tags` and `geometry` are both
/// optional in the wire format; absent values decode to an empty map and
/// None respectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    pub geometry: Option<Vec<OverpassGeomPoint>>,
}

/// a single vertex of a way geometry as Overpass serializes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverpassGeomPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<&OverpassGeomPoint> for Point<f64> {
    fn from(value: &OverpassGeomPoint) -> Self {
        Point::new(value.lon, value.lat)
    }
}
