use crate::model::impact::RegionSummary;
use geo::Point;

/// result of one analysis run: region summaries ordered by net impact
/// score descending (ties keep region selection order) and the flat
/// collection of segment start coordinates for map rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub summaries: Vec<RegionSummary>,
    pub points: Vec<Point<f64>>,
}

impl PipelineOutput {
    pub fn total_changed_ways(&self) -> u64 {
        self.summaries.iter().map(|s| s.changed_ways).sum()
    }

    pub fn total_km(&self) -> f64 {
        self.summaries.iter().map(|s| s.total_km).sum()
    }

    pub fn mean_positive_ratio(&self) -> f64 {
        if self.summaries.is_empty() {
            return 0.0;
        }
        self.summaries
            .iter()
            .map(|s| s.eta_positive_ratio)
            .sum::<f64>()
            / self.summaries.len() as f64
    }

    pub fn mean_negative_ratio(&self) -> f64 {
        if self.summaries.is_empty() {
            return 0.0;
        }
        self.summaries
            .iter()
            .map(|s| s.eta_negative_ratio)
            .sum::<f64>()
            / self.summaries.len() as f64
    }
}
