use super::{ChangeQuerySpec, ChangeSource, OverpassError, OverpassResponse};
use std::time::Duration;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// change sets over a month of edits can be large, so this client carries a
/// generous timeout matching the `[timeout:180]` the query itself requests.
const OVERPASS_TIMEOUT: Duration = Duration::from_secs(180);

/// blocking client for the Overpass API interpreter endpoint.
pub struct OverpassClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl OverpassClient {
    pub fn new(endpoint: &str) -> Result<OverpassClient, OverpassError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(OVERPASS_TIMEOUT)
            .build()
            .map_err(|e| OverpassError::ClientError(e.to_string()))?;
        Ok(OverpassClient {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl ChangeSource for OverpassClient {
    fn fetch_changes(&self, spec: &ChangeQuerySpec) -> Result<OverpassResponse, OverpassError> {
        let region = spec.region().to_string();
        let response = self
            .client
            .post(&self.endpoint)
            .body(spec.to_string())
            .send()
            .map_err(|e| OverpassError::RequestError {
                region: region.clone(),
                source: e,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::StatusError { region, status });
        }
        let body = response.text().map_err(|e| OverpassError::RequestError {
            region: region.clone(),
            source: e,
        })?;
        serde_json::from_str(&body).map_err(|e| OverpassError::DecodeError { region, source: e })
    }
}
