pub mod impact_ops;
mod impact_label;
mod impact_result;
mod region_accumulator;
mod region_summary;

pub use impact_label::ImpactLabel;
pub use impact_result::ImpactResult;
pub use region_accumulator::RegionAccumulator;
pub use region_summary::RegionSummary;
