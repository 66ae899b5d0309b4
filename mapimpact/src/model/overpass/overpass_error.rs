use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverpassError {
    #[error("failure building overpass http client: {0}")]
    ClientError(String),
    #[error("overpass request for region '{region}' failed: {source}")]
    RequestError {
        region: String,
        source: reqwest::Error,
    },
    #[error("overpass returned status {status} for region '{region}'")]
    StatusError {
        region: String,
        status: reqwest::StatusCode,
    },
    #[error("failure decoding overpass response for region '{region}': {source}")]
    DecodeError {
        region: String,
        source: serde_json::Error,
    },
}
