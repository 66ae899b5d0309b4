use super::{ImpactLabel, ImpactResult};
use std::collections::HashMap;

/// prior-distance coefficient for `maxspeed` edits: a speed-limit update
/// is treated as if the previously-preferred route was 10% longer, so the
/// current route reads as an improvement.
const MAXSPEED_PRIOR_FACTOR: f64 = 1.10;
/// prior-distance coefficient for `oneway` edits: a new directional
/// restriction is treated as lengthening the route by ~5%.
const ONEWAY_PRIOR_FACTOR: f64 = 0.95;
/// prior-distance coefficient for `access` edits: an access restriction is
/// treated as lengthening the route by ~10%.
const ACCESS_PRIOR_FACTOR: f64 = 0.90;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// ETA proxy for one changed segment. given its tag mapping and the
/// measured current driving distance in meters, estimates the prior
/// distance from a calibrated coefficient and returns the signed delta in
/// kilometers together with an impact direction.
///
/// the dispatch is priority-ordered over a closed set of attributes and the
/// first match wins: a segment tagged both `maxspeed` and `oneway` is
/// classified solely by `maxspeed`. a zero measured distance (including
/// the measurement-failure sentinel) degenerates to a zero delta.
pub fn eta_proxy_change(tags: &HashMap<String, String>, measured_m: f64) -> ImpactResult {
    let (prior_m, label) = if tags.contains_key("maxspeed") {
        (measured_m * MAXSPEED_PRIOR_FACTOR, ImpactLabel::Positive)
    } else if tags.contains_key("oneway") {
        (measured_m * ONEWAY_PRIOR_FACTOR, ImpactLabel::Negative)
    } else if tags.contains_key("access") {
        (measured_m * ACCESS_PRIOR_FACTOR, ImpactLabel::Negative)
    } else {
        (measured_m, ImpactLabel::Neutral)
    };
    let delta_km = round3((measured_m - prior_m) / 1000.0);
    ImpactResult { delta_km, label }
}
