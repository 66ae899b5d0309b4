use serde::{Deserialize, Serialize};

/// per-region roll-up of one analysis run. immutable once built by
/// [`super::RegionAccumulator::build`]; the serde renames reproduce the
/// report's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    #[serde(rename = "city")]
    pub region: String,
    /// segments with measurable (≥2 point) geometry that were processed
    pub changed_ways: u64,
    /// sum of measured driving distances, km, 2 decimals
    pub total_km: f64,
    /// mean per-segment distance delta, km, 3 decimals. directional ETA
    /// proxy: negative = shortening, positive = lengthening
    #[serde(rename = "Δdistance_km")]
    pub mean_delta_km: f64,
    pub maxspeed_changes: u64,
    pub oneway_changes: u64,
    pub access_changes: u64,
    #[serde(rename = "eta_positive_ratio (%)")]
    pub eta_positive_ratio: f64,
    #[serde(rename = "eta_negative_ratio (%)")]
    pub eta_negative_ratio: f64,
    /// positive ratio minus negative ratio, in percentage points
    #[serde(rename = "eta_net_impact_score (pp)")]
    pub eta_net_impact_score: f64,
    /// sum of the three tag counts; counts are not mutually exclusive so
    /// this may exceed `changed_ways`
    pub critical_changes: u64,
    #[serde(rename = "critical_ratio (%)")]
    pub critical_ratio: f64,
}
