use super::{DistanceSource, OsrmError, OsrmResponse};
use geo::Point;
use std::time::Duration;

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org/route/v1/driving";

/// one routing call happens per changed segment, so the timeout is kept
/// short to bound total run time.
const OSRM_TIMEOUT: Duration = Duration::from_secs(10);

/// blocking client for the OSRM route service, distance-only queries.
pub struct OsrmClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(endpoint: &str) -> Result<OsrmClient, OsrmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(OSRM_TIMEOUT)
            .build()
            .map_err(|e| OsrmError::ClientError(e.to_string()))?;
        Ok(OsrmClient {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl DistanceSource for OsrmClient {
    fn driving_distance_meters(
        &self,
        start: &Point<f64>,
        end: &Point<f64>,
    ) -> Result<f64, OsrmError> {
        // OSRM path coordinates are lon,lat pairs; overview=false drops the
        // route geometry from the response.
        let url = format!(
            "{}/{},{};{},{}?overview=false",
            self.endpoint,
            start.x(),
            start.y(),
            end.x(),
            end.y()
        );
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| OsrmError::RequestError { source: e })?;
        let status = response.status();
        if !status.is_success() {
            return Err(OsrmError::StatusError { status });
        }
        let body = response
            .text()
            .map_err(|e| OsrmError::RequestError { source: e })?;
        let decoded: OsrmResponse =
            serde_json::from_str(&body).map_err(|e| OsrmError::DecodeError { source: e })?;
        match decoded.routes.first() {
            Some(route) => Ok(route.distance),
            None => Err(OsrmError::NoRoutes),
        }
    }
}
