use super::{OverpassElement, OverpassResponse};
use geo::Point;
use std::collections::HashMap;

/// one changed road segment extracted from an Overpass response: its tag
/// mapping and its ordered way geometry. transient, consumed within one
/// pipeline pass.
#[derive(Debug, Clone)]
pub struct Segment {
    pub tags: HashMap<String, String>,
    pub geometry: Vec<Point<f64>>,
}

impl Segment {
    pub fn new(tags: HashMap<String, String>, geometry: Vec<Point<f64>>) -> Segment {
        Segment { tags, geometry }
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// first and last geometry points, used as the (start, end) pair for a
    /// point-to-point routing query. only the endpoints are used, not the
    /// full polyline; geometries with fewer than two points cannot be
    /// measured and yield None.
    pub fn endpoints(&self) -> Option<(Point<f64>, Point<f64>)> {
        if self.geometry.len() < 2 {
            return None;
        }
        let first = self.geometry.first()?;
        let last = self.geometry.last()?;
        Some((*first, *last))
    }
}

fn segment_from_element(element: &OverpassElement) -> Option<Segment> {
    if element.element_type != "way" {
        return None;
    }
    let geometry = element.geometry.as_ref()?;
    if geometry.is_empty() {
        return None;
    }
    let points = geometry.iter().map(Point::from).collect();
    Some(Segment::new(element.tags.clone(), points))
}

/// lazily walks an Overpass document, yielding each linear way that carries
/// geometry. nodes, relations and geometry-less ways are dropped.
pub fn extract_segments(response: &OverpassResponse) -> impl Iterator<Item = Segment> + '_ {
    response.elements.iter().filter_map(segment_from_element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::overpass::OverpassGeomPoint;

    fn way(tags: &[(&str, &str)], points: &[(f64, f64)]) -> OverpassElement {
        OverpassElement {
            element_type: String::from("way"),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            geometry: Some(
                points
                    .iter()
                    .map(|(lat, lon)| OverpassGeomPoint {
                        lat: *lat,
                        lon: *lon,
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_extract_keeps_only_ways_with_geometry() {
        let response = OverpassResponse {
            elements: vec![
                OverpassElement {
                    element_type: String::from("node"),
                    tags: Default::default(),
                    geometry: Some(vec![OverpassGeomPoint { lat: 1.0, lon: 2.0 }]),
                },
                OverpassElement {
                    element_type: String::from("way"),
                    tags: Default::default(),
                    geometry: None,
                },
                way(&[("highway", "primary")], &[(39.0, 32.0), (39.1, 32.1)]),
            ],
        };
        let segments: Vec<Segment> = extract_segments(&response).collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].tags.get("highway"),
            Some(&String::from("primary"))
        );
    }

    #[test]
    fn test_single_point_way_extracted_but_unmeasurable() {
        let response = OverpassResponse {
            elements: vec![way(&[], &[(39.0, 32.0)])],
        };
        let segments: Vec<Segment> = extract_segments(&response).collect();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].endpoints().is_none());
    }

    #[test]
    fn test_endpoints_are_first_and_last() {
        let el = way(&[], &[(39.0, 32.0), (39.5, 32.5), (40.0, 33.0)]);
        let response = OverpassResponse { elements: vec![el] };
        let segment = extract_segments(&response).next().unwrap();
        let (start, end) = segment.endpoints().unwrap();
        // geo points are (x, y) = (lon, lat)
        assert_eq!((start.y(), start.x()), (39.0, 32.0));
        assert_eq!((end.y(), end.x()), (40.0, 33.0));
    }
}
