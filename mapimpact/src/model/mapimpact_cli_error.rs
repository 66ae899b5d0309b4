use crate::app::pipeline::PipelineError;
use crate::model::overpass::OverpassError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapImpactCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("analysis failed: {source}")]
    PipelineError {
        #[from]
        source: PipelineError,
    },
    #[error("failure building overpass client: {source}")]
    OverpassError {
        #[from]
        source: OverpassError,
    },
    #[error("failure writing report: {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing file {path}: {source}")]
    StdIoError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
