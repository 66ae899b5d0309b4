use super::ImpactLabel;
use serde::{Deserialize, Serialize};

/// classification outcome for one segment: the signed distance delta in
/// kilometers (already rounded to 3 decimals) and the impact direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub delta_km: f64,
    pub label: ImpactLabel,
}
