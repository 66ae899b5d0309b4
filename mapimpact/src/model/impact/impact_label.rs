use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// direction of a segment's estimated effect on travel time. positive
/// means the edit likely improves ETA, negative that it likely worsens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLabel {
    Positive,
    Negative,
    Neutral,
}

impl Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLabel::Positive => write!(f, "positive"),
            ImpactLabel::Negative => write!(f, "negative"),
            ImpactLabel::Neutral => write!(f, "neutral"),
        }
    }
}
