use crate::model::MapImpactCliError;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// the full highway-class universe the analysis understands. restricting a
/// run to the arterial classes (the default selection) keeps Overpass
/// queries fast.
pub const ALL_HIGHWAY_TYPES: [&str; 12] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "service",
    "unclassified",
    "track",
    "path",
    "living_street",
    "road",
];

const DEFAULT_HIGHWAY_TYPES: [&str; 5] = ["motorway", "trunk", "primary", "secondary", "tertiary"];
const DEFAULT_WINDOW_DAYS: i64 = 30;

fn default_overpass_url() -> String {
    String::from(crate::model::overpass::DEFAULT_OVERPASS_URL)
}

fn default_osrm_url() -> String {
    String::from(crate::model::osrm::DEFAULT_OSRM_URL)
}

/// defines the inputs of one analysis run
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RunConfiguration {
    /// change window start; only edits after this date are analyzed
    pub start_date: NaiveDate,
    /// change window end, clamped to today by the CLI before a run
    pub end_date: NaiveDate,
    /// highway class values to match, interpolated into the change query
    pub highway_filters: Vec<String>,
    /// administrative area names to analyze, in selection order
    pub regions: Vec<String>,
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,
    #[serde(default = "default_osrm_url")]
    pub osrm_url: String,
    /// measure segment distances in parallel. aggregation is
    /// order-independent so results match the sequential default
    #[serde(default)]
    pub parallelize: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        let today = Utc::now().date_naive();
        Self {
            start_date: today - Duration::days(DEFAULT_WINDOW_DAYS),
            end_date: today,
            highway_filters: DEFAULT_HIGHWAY_TYPES.iter().map(|s| s.to_string()).collect(),
            regions: vec![String::from("Ankara")],
            overpass_url: default_overpass_url(),
            osrm_url: default_osrm_url(),
            parallelize: false,
        }
    }
}

impl RunConfiguration {
    pub fn validate(&self) -> Result<(), MapImpactCliError> {
        if self.regions.is_empty() {
            return Err(MapImpactCliError::ConfigurationError(String::from(
                "at least one region must be selected",
            )));
        }
        if self.highway_filters.is_empty() {
            return Err(MapImpactCliError::ConfigurationError(String::from(
                "at least one highway filter must be selected",
            )));
        }
        let today = Utc::now().date_naive();
        if self.start_date > today {
            return Err(MapImpactCliError::ConfigurationError(format!(
                "window start {} is in the future",
                self.start_date
            )));
        }
        if self.start_date > self.end_date {
            return Err(MapImpactCliError::ConfigurationError(format!(
                "window start {} is after window end {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }

    /// the end-of-window rule belongs to the caller, not the core: a
    /// configured end date after today is pulled back to today.
    pub fn clamp_end_date(&mut self) {
        let today = Utc::now().date_naive();
        if self.end_date > today {
            log::info!("clamping window end {} to today {}", self.end_date, today);
            self.end_date = today;
        }
    }
}

impl TryFrom<&String> for RunConfiguration {
    type Error = MapImpactCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                MapImpactCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                MapImpactCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                MapImpactCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                MapImpactCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(MapImpactCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
