use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsrmError {
    #[error("failure building osrm http client: {0}")]
    ClientError(String),
    #[error("osrm request failed: {source}")]
    RequestError { source: reqwest::Error },
    #[error("osrm returned status {status}")]
    StatusError { status: reqwest::StatusCode },
    #[error("failure decoding osrm response: {source}")]
    DecodeError { source: serde_json::Error },
    #[error("osrm returned no routes between the requested points")]
    NoRoutes,
}
