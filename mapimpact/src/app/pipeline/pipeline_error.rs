use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("no region produced any changed ways; widen the date window, region set or highway filters")]
    NoResults,
    #[error("invalid analysis inputs: {0}")]
    InvalidInput(String),
    #[error("failure reporting progress: {0}")]
    ProgressBarError(String),
}
