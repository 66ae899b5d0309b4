pub mod pipeline_ops;
mod pipeline_error;
mod pipeline_output;

pub use pipeline_error::PipelineError;
pub use pipeline_output::PipelineOutput;
