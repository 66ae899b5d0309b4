use serde::{Deserialize, Serialize};

/// OSRM route response, reduced to the fields this crate reads. the
/// request asks for no path geometry so each route is little more than
/// its distance and duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OsrmResponse {
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmRoute {
    /// driving distance in meters
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_first_route_distance() {
        let json = r#"{"code":"Ok","routes":[{"distance":1532.7,"duration":180.2}]}"#;
        let doc: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(doc.routes[0].distance, 1532.7);
    }

    #[test]
    fn test_decode_empty_routes() {
        let json = r#"{"code":"NoRoute","routes":[]}"#;
        let doc: OsrmResponse = serde_json::from_str(json).unwrap();
        assert!(doc.routes.is_empty());
    }
}
