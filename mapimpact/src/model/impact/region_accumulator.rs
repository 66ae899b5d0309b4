use super::impact_ops::{round2, round3};
use super::{ImpactLabel, ImpactResult, RegionSummary};
use crate::model::overpass::Segment;

/// private fold state for one region's classified segments. every field is
/// a commutative reducer (count or sum), so accumulators built over
/// disjoint slices of a region can be merged in any order, which is what
/// lets the pipeline parallelize measurement without locks.
#[derive(Debug, Clone, Default)]
pub struct RegionAccumulator {
    changed_ways: u64,
    distance_m_total: f64,
    delta_km_total: f64,
    maxspeed_count: u64,
    oneway_count: u64,
    access_count: u64,
    positive_count: u64,
    negative_count: u64,
}

impl RegionAccumulator {
    pub fn new() -> RegionAccumulator {
        Default::default()
    }

    /// folds one measured, classified segment into the accumulator. the
    /// tag counters are independent of the classifier's single-label
    /// choice: a segment carrying several watched tags increments several
    /// counters.
    pub fn add(&mut self, segment: &Segment, impact: &ImpactResult, measured_m: f64) {
        self.changed_ways += 1;
        self.distance_m_total += measured_m;
        self.delta_km_total += impact.delta_km;
        if segment.has_tag("maxspeed") {
            self.maxspeed_count += 1;
        }
        if segment.has_tag("oneway") {
            self.oneway_count += 1;
        }
        if segment.has_tag("access") {
            self.access_count += 1;
        }
        match impact.label {
            ImpactLabel::Positive => self.positive_count += 1,
            ImpactLabel::Negative => self.negative_count += 1,
            ImpactLabel::Neutral => {}
        }
    }

    pub fn merge(mut self, other: RegionAccumulator) -> RegionAccumulator {
        self.changed_ways += other.changed_ways;
        self.distance_m_total += other.distance_m_total;
        self.delta_km_total += other.delta_km_total;
        self.maxspeed_count += other.maxspeed_count;
        self.oneway_count += other.oneway_count;
        self.access_count += other.access_count;
        self.positive_count += other.positive_count;
        self.negative_count += other.negative_count;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changed_ways == 0
    }

    /// finalizes the fold into an immutable summary. ratios divide by the
    /// processed-segment count and are defined as 0 when that count is 0.
    pub fn build(&self, region: &str) -> RegionSummary {
        let changed = self.changed_ways as f64;
        let mean_delta_km = if self.changed_ways > 0 {
            self.delta_km_total / changed
        } else {
            0.0
        };
        let pos_ratio = if self.changed_ways > 0 {
            self.positive_count as f64 / changed * 100.0
        } else {
            0.0
        };
        let neg_ratio = if self.changed_ways > 0 {
            self.negative_count as f64 / changed * 100.0
        } else {
            0.0
        };
        let critical_changes = self.maxspeed_count + self.oneway_count + self.access_count;
        let critical_ratio = if self.changed_ways > 0 {
            critical_changes as f64 / changed * 100.0
        } else {
            0.0
        };
        RegionSummary {
            region: region.to_string(),
            changed_ways: self.changed_ways,
            total_km: round2(self.distance_m_total / 1000.0),
            mean_delta_km: round3(mean_delta_km),
            maxspeed_changes: self.maxspeed_count,
            oneway_changes: self.oneway_count,
            access_changes: self.access_count,
            eta_positive_ratio: round2(pos_ratio),
            eta_negative_ratio: round2(neg_ratio),
            eta_net_impact_score: round2(pos_ratio - neg_ratio),
            critical_changes,
            critical_ratio: round2(critical_ratio),
        }
    }
}
